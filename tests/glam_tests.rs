#![cfg(feature = "glam")]

use dangle::{ChainConfig, ChainSimulator, NoOpStepObserver};
use dangle::Vec as _;

const DT: f32 = 1.0 / 60.0;

#[test]
fn glam_vec3_chain_follows_target() {
    let bones = [
        glam::Vec3::new(0.0, 0.0, 0.0),
        glam::Vec3::new(0.0, -1.0, 0.0),
        glam::Vec3::new(0.0, -2.0, 0.0),
    ];
    let config = ChainConfig::new().with_gravity(glam::Vec3::new(0.0, -9.81, 0.0));
    let mut chain = ChainSimulator::new(&bones, config).unwrap();
    let target = glam::Vec3::new(0.5, 0.25, -0.5);

    for _ in 0..60 {
        chain.step(DT, Some(target), &mut NoOpStepObserver);
    }

    assert_eq!(chain.root(), target);
    for (i, rest) in chain.segment_lengths().iter().enumerate() {
        let len = chain.position(i).distance(chain.position(i + 1));
        assert!((len - rest).abs() < 1e-3, "segment {} length {}", i, len);
    }
    assert!(chain.positions().iter().all(|p| p.is_finite()));
}

#[test]
fn glam_vec2_chain_sags_under_gravity() {
    let bones = [
        glam::Vec2::new(0.0, 0.0),
        glam::Vec2::new(1.0, 0.0),
        glam::Vec2::new(2.0, 0.0),
    ];
    let config = ChainConfig::new().with_gravity(glam::Vec2::new(0.0, -9.81));
    let mut chain = ChainSimulator::new(&bones, config).unwrap();

    for _ in 0..30 {
        chain.step(DT, Some(glam::Vec2::ZERO), &mut NoOpStepObserver);
    }

    assert_eq!(chain.root(), glam::Vec2::ZERO);
    assert!(chain.tip().y < 0.0, "tip should fall, y = {}", chain.tip().y);
}
