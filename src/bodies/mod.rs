mod ball;
mod material;

pub use self::ball::Ball;
pub use self::ball_flags::BallFlags;
pub use self::material::Material;

/// Flags for controlling body behavior
pub mod ball_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags tracking the transient state of the simulated ball
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct BallFlags: u32 {
            /// Ball is pinned to the pointer and ignores the integrator
            const DRAGGING = 0x01;

            /// Ball came to rest below the sleep threshold
            const ASLEEP = 0x02;
        }
    }
}
