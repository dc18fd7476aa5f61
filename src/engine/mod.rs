//! The discovery engine: facet filtering and stable ranking
//!
//! Data flow: catalog slice → [`filter`] → [`rank`] → ordered references
//! consumed by the rendering layer. Both stages are pure and synchronous —
//! a new query simply supersedes the previous result, so there is nothing
//! to cancel or lock. [`discover`] is the composed pipeline every call
//! site uses.

pub mod filter;
pub mod rank;

pub use filter::{FacetFilterExt, filter};
pub use rank::{discover, rank};
