// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod catalog;
pub mod ids;
pub mod model;
pub mod palette;
pub mod session;
pub mod state;

pub use catalog::*;
pub use ids::*;
pub use model::*;
pub use palette::*;
pub use session::*;
pub use state::*;
