use dangle::{ChainConfig, ChainRig, ChainSimulator, NoOpStepObserver, Vec3};

fn run_tail(frames: usize) -> Vec<Vec3<f32>> {
    let bones = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.2, -1.0, 0.0),
        Vec3::new(0.1, -2.0, 0.3),
        Vec3::new(0.0, -3.0, 0.1),
        Vec3::new(-0.2, -4.0, 0.0),
    ];
    let config = ChainConfig::new()
        .with_gravity(Vec3::new(0.0, -9.81, 0.0))
        .with_iterations(8);
    let mut chain = ChainSimulator::new(&bones, config).unwrap();
    for frame in 0..frames {
        let t = frame as f32 / 60.0;
        chain.step(1.0 / 60.0, Some(Vec3::new(t, 0.0, -t)), &mut NoOpStepObserver);
    }
    chain.positions().to_vec()
}

#[test]
fn chain_deterministic() {
    let results: Vec<_> = (0..5).map(|_| run_tail(120)).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
            assert_eq!(a.z, b.z);
        }
    }
}

#[test]
fn rig_matches_standalone_chain() {
    let bones = [
        Vec3::new(0.0f32, 0.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, -2.0, 0.0),
    ];
    let config = ChainConfig::new().with_gravity(Vec3::new(0.0, -9.81, 0.0));
    let target = Some(Vec3::new(0.5, 0.0, 0.0));

    let mut standalone = ChainSimulator::new(&bones, config.clone()).unwrap();
    let mut rig = ChainRig::new();
    // A neighbour in the same rig must not influence the result.
    let other = rig.add_chain(&bones, config.clone().with_stiffness(0.0, 0.0));
    let handle = rig.add_chain(&bones, config);
    rig.set_target(other, Some(Vec3::new(-4.0, 1.0, 0.0))).unwrap();
    rig.set_target(handle, target).unwrap();

    for _ in 0..90 {
        standalone.step(1.0 / 60.0, target, &mut NoOpStepObserver);
        rig.step(1.0 / 60.0, &mut NoOpStepObserver);
    }

    assert_eq!(rig.chain(handle).unwrap().positions(), standalone.positions());
}
