/// Asserts the number of live agents.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!($world.agent_count(), $count, "Population count mismatch");
    };
}

/// Asserts that an agent with the given ID is no longer in the world.
#[macro_export]
macro_rules! assert_agent_gone {
    ($world:expr, $id:expr) => {
        assert!(
            $world.agent($id).is_none(),
            "Agent {} should be gone but was found",
            $id
        );
    };
}

/// Asserts that an agent's hunger is within 1e-9 of the expected value.
#[macro_export]
macro_rules! assert_hunger {
    ($world:expr, $id:expr, $expected:expr) => {
        let agent = $world.agent($id).expect("Agent not found in world");
        assert!(
            (agent.hunger - $expected).abs() < 1e-9,
            "Agent {} hunger {} is not {}",
            $id,
            agent.hunger,
            $expected
        );
    };
}

/// Asserts that at least one event matches the pattern.
#[macro_export]
macro_rules! assert_event {
    ($events:expr, $pattern:pat if $guard:expr) => {
        assert!(
            $events.iter().any(|e| matches!(e, $pattern if $guard)),
            "No event matching {} in {:?}",
            stringify!($pattern),
            $events
        );
    };
    ($events:expr, $pattern:pat) => {
        assert!(
            $events.iter().any(|e| matches!(e, $pattern)),
            "No event matching {} in {:?}",
            stringify!($pattern),
            $events
        );
    };
}
