//! # boundary-lint-ts
//!
//! Tree-sitter based TypeScript syntax provider for boundary-lint.
//!
//! Reduces `.ts`/`.tsx`/`.js`/`.jsx` files to the `boundary-lint-core`
//! module IR consumed by the boundary engine:
//!
//! - [`SyntaxProvider`] trait for pluggable parsers
//! - [`TypeScriptExtractor`] extracting imports, re-exports, type-only
//!   flags, and inline strategy comments

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod extractor;
pub mod typescript;

pub use extractor::{ExtractError, SyntaxProvider};
pub use typescript::TypeScriptExtractor;
