//! Verlet integration and root pinning, the first two phases of a step.

use crate::state::ChainState;
use crate::vec::Vec;

impl<V: Vec> ChainState<V> {
    /// Advance bones `first..len()` by one Verlet step.
    ///
    /// `velocity = (pos - prev) * damping`, then
    /// `pos += velocity + gravity * gravity_scale[i] * dt²`.
    /// Callers pass `first = 1` so the root is left to the pin or relaxation.
    pub fn integrate(&mut self, first: usize, dt: V::Scalar, damping: V::Scalar, gravity: V) {
        let dt_sq = dt * dt;
        for i in first..self.positions.len() {
            let pos = self.positions[i];
            let velocity = (pos - self.prev_positions[i]).scale(damping);
            self.prev_positions[i] = pos;
            self.positions[i] = pos + velocity + gravity.scale(self.gravity_scale[i] * dt_sq);
        }
    }

    /// Snap the root onto the follow target, overriding whatever it held.
    pub fn pin_root(&mut self, target: V) {
        self.positions[0] = target;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ChainConfig;
    use crate::state::ChainState;
    use crate::vec::{Vec, Vec3};

    fn hanging(config: &ChainConfig<Vec3<f32>>) -> ChainState<Vec3<f32>> {
        let bones = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, -2.0, 0.0),
        ];
        ChainState::capture(&bones, config).unwrap()
    }

    #[test]
    fn root_is_skipped_from_index_one() {
        let config = ChainConfig::new().with_gravity_scale(1.0, 1.0);
        let mut state = hanging(&config);
        state.integrate(1, 0.1, 1.0, Vec3::new(0.0, -10.0, 0.0));

        assert_eq!(state.positions()[0], Vec3::zero());
        // -10 * 0.01 = -0.1 per bone at rest
        assert!((state.positions()[1].y - -1.1).abs() < 1e-6);
        assert!((state.positions()[2].y - -2.1).abs() < 1e-6);
        assert_eq!(state.prev_positions()[1], Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn gravity_scale_weights_each_bone() {
        let config = ChainConfig::new().with_gravity_scale(0.0, 2.0);
        let mut state = hanging(&config);
        state.integrate(1, 0.1, 1.0, Vec3::new(0.0, -10.0, 0.0));

        // bone 1 sits at t = 0.5 -> scale 1.0, tip -> 2.0
        assert!((state.positions()[1].y - -1.1).abs() < 1e-6);
        assert!((state.positions()[2].y - -2.2).abs() < 1e-6);
    }

    #[test]
    fn damping_scales_implicit_velocity() {
        let mut state = hanging(&ChainConfig::new());
        state.positions[2] = Vec3::new(1.0, -2.0, 0.0);
        state.integrate(1, 0.0, 0.5, Vec3::zero());

        assert!((state.positions()[2].x - 1.5).abs() < 1e-6);
        assert_eq!(state.prev_positions()[2].x, 1.0);
    }

    #[test]
    fn pin_overrides_root() {
        let mut state = hanging(&ChainConfig::new());
        let target = Vec3::new(3.0, 4.0, 5.0);
        state.pin_root(target);
        assert_eq!(state.positions()[0], target);
    }
}
