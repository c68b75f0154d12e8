mod body_shape;
mod db_vec3;
mod motion_kind;

pub use body_shape::*;
pub use db_vec3::*;
pub use motion_kind::*;
