use glam::Vec3;

/// Shared behaviour for protons, neutrons, and electrons.
pub trait Particle {
    fn position(&self) -> Vec3;

    /// Distance from the nucleus center.
    fn radial_distance(&self) -> f32 {
        self.position().length()
    }
}
