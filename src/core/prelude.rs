#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use tracing::{debug, error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::{
        config::*,
        error::{GeomError, Result},
    },
    util::{
        color::Color,
        linalg,
        linalg::{Vector2, Vector3},
        pack::Packable,
        shape::{Box2D, Circle, Line, Rect},
    },
};
