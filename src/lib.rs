//! Small 2D/3D geometry and colour value types with a fixed-width byte codec.
//!
//! ```
//! use simplevector::core::prelude::*;
//!
//! let mut v = Vector2::new(10.0, 10.0);
//! v.set_degrees(90.0);
//! assert_eq!(v, Vector2::new(0.0, 200.0_f64.sqrt()));
//!
//! let bytes = v.to_bytes().unwrap();
//! assert_eq!(bytes.len(), Vector2::PACKED_LEN);
//! assert_eq!(Vector2::from_bytes(&bytes).unwrap(), v);
//! ```

pub mod core;
pub mod util;
