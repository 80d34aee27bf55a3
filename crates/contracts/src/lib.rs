//! Platform-independent types shared by the frontend: the app-details tab
//! model, its registry and the layout math behind the tab strip.

pub mod shared;
