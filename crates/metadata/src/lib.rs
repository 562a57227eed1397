//! Record metadata.
//!
//! A record is a Rust struct mapped to one row of a table or view.  Its shape (columns, primary key, schema and table
//! name) is known two ways:
//!
//! - The static analyzer in `reform_parse` reads the declaration's source text ahead of compilation, and the code
//!   generator embeds the result as a constant [RecordDescriptor].
//! - The runtime introspector in this crate walks the reflection table emitted by `#[derive(Reflect)]`.
//!
//! Both go through the same rules in [rules], so they reject the same declarations with the same messages.  The
//! [assert_up_to_date] check compares the two at startup and refuses to continue if they disagree.
mod descriptor;
mod error;
mod introspect;
mod reflect;
pub mod rules;
mod up_to_date;

pub use descriptor::*;
pub use error::*;
pub use introspect::*;
pub use reflect::*;
pub use up_to_date::*;
