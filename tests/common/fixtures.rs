//! Config and package fixtures

/// Minimal valid project; cleanup on (the default)
pub const BASIC_CONFIG: &str = r#"
[function]
name = "orders"
handler = "index.handler"
role = "arn:aws:iam::123456789012:role/orders"
package = "dist/orders.zip"
runtime = "nodejs20.x"

[environments.staging]
description = "Staging traffic"

[environments.prod]
description = "Production traffic"
"#;

/// Same project with automatic cleanup disabled
pub const NO_CLEANUP_CONFIG: &str = r#"
[function]
name = "orders"
handler = "index.handler"
role = "arn:aws:iam::123456789012:role/orders"
package = "dist/orders.zip"
runtime = "nodejs20.x"
delete_unreferenced_versions = false
"#;

/// Memory size that fails validation
pub const MISALIGNED_MEMORY_CONFIG: &str = r#"
[function]
name = "orders"
handler = "index.handler"
role = "role"
package = "dist/orders.zip"
runtime = "nodejs20.x"
memory_size = 200
"#;

pub const PACKAGE_PATH: &str = "dist/orders.zip";

pub const PACKAGE_V1: &[u8] = b"PK\x03\x04 orders v1";
pub const PACKAGE_V2: &[u8] = b"PK\x03\x04 orders v2";
