mod common;

use common::{AgentBuilder, WorldBuilder};
use objectlife_lib::model::config::AppConfig;
use objectlife_lib::model::state::AgentStatus;
use objectlife_lib::model::world::World;

#[test]
fn test_left_edge_flips_heading_not_position() {
    let (mut world, ids) = WorldBuilder::new()
        .with_food(900.0, 600.0)
        .with_agent(
            AgentBuilder::new()
                .at(5.0, 300.0)
                .hunger(2.0)
                .births(3, 3)
                .heading(-1.0, 0.0),
        )
        .build();

    world.update();

    let agent = world.agent(ids[0]).unwrap();
    assert_eq!(agent.status, AgentStatus::Doodle);
    let dir = agent.direction.unwrap();
    assert!(dir.dx() > 0.0, "x component must flip");
    assert!((agent.position.x - 10.0).abs() < 1e-9);
    assert!((agent.position.y - 300.0).abs() < 1e-9);
}

#[test]
fn test_bottom_edge_flips_only_y() {
    let (mut world, ids) = WorldBuilder::new()
        .with_food(900.0, 100.0)
        .with_agent(
            AgentBuilder::new()
                .at(400.0, 715.0)
                .hunger(2.0)
                .births(3, 3)
                .heading(1.0, 1.0),
        )
        .build();

    world.update();

    let dir = world.agent(ids[0]).unwrap().direction.unwrap();
    assert!(dir.dx() > 0.0);
    assert!(dir.dy() < 0.0);
}

#[test]
fn test_wanderers_push_apart() {
    let (mut world, ids) = WorldBuilder::new()
        .with_food(900.0, 600.0)
        .with_agent(AgentBuilder::new().at(300.0, 300.0).hunger(2.0).births(3, 3).heading(0.0, 1.0))
        .with_agent(AgentBuilder::new().at(310.0, 300.0).hunger(2.0).births(3, 3).heading(0.0, 1.0))
        .build();

    world.update();

    let a = world.agent(ids[0]).unwrap().position;
    let b = world.agent(ids[1]).unwrap().position;
    assert!(a.distance_sq(&b).sqrt() > 10.0);
    assert!(a.x < 300.0, "first agent is pushed left");
}

#[test]
fn test_directions_stay_unit_through_a_long_run() {
    let mut config = AppConfig::default();
    config.world.seed = Some(2024);
    let mut world = World::new(config).unwrap();

    for _ in 0..600 {
        world.update();
        for agent in &world.agents {
            if let Some(dir) = agent.direction {
                assert!(
                    (dir.magnitude() - 1.0).abs() < 1e-6,
                    "agent {} heading has magnitude {}",
                    agent.id,
                    dir.magnitude()
                );
            }
            assert!(agent.position.is_finite());
            assert!(agent.hunger.is_finite());
        }
    }
}

#[test]
fn test_trails_are_bounded_and_optional() {
    let mut config = AppConfig::default();
    config.world.seed = Some(5);
    config.trail.path_history_limit = 4;
    let mut world = World::new(config.clone()).unwrap();
    for _ in 0..200 {
        world.update();
    }
    assert!(world.agents.iter().all(|a| a.path.len() <= 4));
    assert!(world.agents.iter().any(|a| !a.path.is_empty()));

    config.trail.record_paths = false;
    let mut quiet = World::new(config).unwrap();
    for _ in 0..200 {
        quiet.update();
    }
    assert!(quiet.agents.iter().all(|a| a.path.is_empty()));
}
