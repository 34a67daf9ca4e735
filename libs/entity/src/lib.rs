pub mod event;
pub mod time;

pub mod prelude {
    pub use crate::event::Event as EventEntity;
}
