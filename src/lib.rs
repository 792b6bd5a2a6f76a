//! Reader for INI-style configuration files: named `[section]` headers
//! containing `key = value` pairs, with typed accessors and
//! default-value fallback.
//!
//! ```
//! use inicfg::IniReader;
//!
//! let reader = IniReader::parse_str("[server]\nport = 8080\n");
//!
//! assert!(reader.success());
//! assert_eq!(reader.get_int("server", "port", 80), 8080);
//! ```

pub mod logging;
pub mod reader;

pub use reader::{ErrorKind, Field, IniReader, ParseError, ParseOptions, Section};
