//! Input handling
//!
//! Routes keystrokes to the top overlay or the main panes and interprets
//! the tagged actions they resolve to.

pub mod router;

pub use router::{dispatch, handle_key_event, handle_paste};
