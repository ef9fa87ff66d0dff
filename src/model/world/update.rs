use super::World;
use crate::model::lifecycle::{create_food_with_rng, death_cause, give_birth, update_status};
use crate::model::metrics::{BIRTHS, DEATHS, FOOD_EATEN, FOOD_PRODUCED, SITE_VISITS};
use crate::model::spatial_hash::{find_nearest, EntityKind};
use objectlife_core::effects;
use objectlife_core::systems::movement::{self, SeekStep, SEEK_TRAIL_EVERY, WANDER_TRAIL_EVERY};
use objectlife_core::systems::{biological, ecological, steering};
use objectlife_data::{Agent, AgentStatus, FoodStatus, LiveEvent, Position, Target};
use std::time::Instant;

/// Agents a mover keeps its distance from: everyone alive except itself,
/// its current destination and agents that are out looking for a mate.
fn separation_neighbours(agents: &[Agent], i: usize) -> impl Iterator<Item = Position> + '_ {
    let destination = agents[i].destination;
    agents
        .iter()
        .enumerate()
        .filter(move |(j, other)| {
            *j != i
                && other.is_alive()
                && other.status != AgentStatus::Mate
                && destination != Some(Target::Agent(other.id))
        })
        .map(|(_, other)| other.position)
}

impl World {
    /// Advances the simulation by one tick and reports what happened.
    ///
    /// Order within a tick:
    /// 1. Rebuild the id maps, census and spatial index.
    /// 2. Visit agents in arena order, newborns included: re-evaluate
    ///    status, act on it, then run the periodic update on interval ticks.
    /// 3. Sweep eaten food.
    /// 4. Let each site convert finished work into food; drop exhausted sites.
    /// 5. Sweep dead agents.
    ///
    /// Earlier agents' moves are visible to later agents in the same tick.
    pub fn update(&mut self) -> Vec<LiveEvent> {
        let start = Instant::now();
        self.tick += 1;
        let mut events = Vec::new();

        self.reindex();
        self.spatial_hash.build(
            self.agents.iter().map(|a| a.position),
            self.foods.iter().map(|f| f.position),
            self.sites.iter().map(|s| s.position),
        );

        let periodic = self.tick % self.config.world.lifecycle_interval == 0;
        let mut i = 0;
        while i < self.agents.len() {
            if self.agents[i].is_alive() {
                let status = update_status(&mut self.agents[i], &self.census);
                self.dispatch(i, status, &mut events);
                if periodic {
                    biological::periodic_update(&mut self.agents[i], &mut self.rng);
                }
            }
            i += 1;
        }

        self.sweep_foods();
        self.run_sites(&mut events);
        self.sweep_agents();
        self.check_over();

        self.metrics.record_tick(
            start.elapsed(),
            self.agent_count(),
            self.food_count(),
            self.site_count(),
        );
        events
    }

    fn dispatch(&mut self, i: usize, status: AgentStatus, events: &mut Vec<LiveEvent>) {
        match status {
            AgentStatus::Doodle => self.wander(i),
            AgentStatus::Mate => self.seek(i, EntityKind::Agent, events),
            AgentStatus::Work => {
                if self.census.sites == 0 {
                    self.agents[i].status = AgentStatus::Doodle;
                } else {
                    self.seek(i, EntityKind::Site, events);
                }
            }
            AgentStatus::Eat => {
                if self.census.foods == 0 {
                    self.agents[i].status = AgentStatus::Work;
                } else {
                    self.seek(i, EntityKind::Food, events);
                }
            }
            AgentStatus::Dead => self.resolve_death(i, events),
        }
    }

    fn wander(&mut self, i: usize) {
        let arena = self.arena();
        let step = movement::wander_step(
            &self.agents[i],
            separation_neighbours(&self.agents, i),
            &arena,
            &mut self.rng,
        );
        debug_assert!(step.position.is_finite(), "wander produced a non-finite position");

        let record = self.config.trail.record_paths && self.tick % WANDER_TRAIL_EVERY == 0;
        let limit = self.config.trail.path_history_limit;
        let agent = &mut self.agents[i];
        agent.position = step.position;
        agent.direction = step.direction;
        if record {
            agent.record_path(limit);
        }
    }

    /// Nearest live candidate of `kind` for agent `i`, grid first.
    fn nearest_target(&self, i: usize, kind: EntityKind) -> Option<Target> {
        let origin = self.agents[i].position;
        match kind {
            EntityKind::Agent => {
                let agents = &self.agents;
                find_nearest(&self.spatial_hash, &origin, kind, agents.len(), |j| {
                    agents
                        .get(j)
                        .filter(|a| j != i && a.is_alive())
                        .map(|a| a.position)
                })
                .map(|j| Target::Agent(agents[j].id))
            }
            EntityKind::Food => {
                let foods = &self.foods;
                find_nearest(&self.spatial_hash, &origin, kind, foods.len(), |j| {
                    foods.get(j).filter(|f| f.is_available()).map(|f| f.position)
                })
                .map(|j| Target::Food(foods[j].id))
            }
            EntityKind::Site => {
                let sites = &self.sites;
                find_nearest(&self.spatial_hash, &origin, kind, sites.len(), |j| {
                    sites.get(j).map(|s| s.position)
                })
                .map(|j| Target::Site(sites[j].id))
            }
        }
    }

    fn seek(&mut self, i: usize, kind: EntityKind, events: &mut Vec<LiveEvent>) {
        let Some(target) = self.nearest_target(i, kind) else {
            return;
        };
        self.agents[i].destination = Some(target);
        let Some((dest_pos, dest_size)) = self.resolve(target) else {
            return;
        };

        let step = movement::seek_step(
            &self.agents[i],
            &dest_pos,
            dest_size,
            separation_neighbours(&self.agents, i),
        );

        match step {
            SeekStep::Advance {
                position,
                direction,
                target_direction,
            } => {
                debug_assert!(position.is_finite(), "seek produced a non-finite position");
                let record = self.config.trail.record_paths && self.tick % SEEK_TRAIL_EVERY == 0;
                let limit = self.config.trail.path_history_limit;
                let agent = &mut self.agents[i];
                agent.position = position;
                agent.direction = direction;
                agent.target_direction = target_direction;
                if let Some(dir) = direction {
                    agent.heading = dir.angle();
                }
                if record {
                    agent.record_path(limit);
                }
            }
            SeekStep::Contact {
                direction,
                target_direction,
                contact_dist,
            } => {
                let agent = &mut self.agents[i];
                agent.direction = direction;
                agent.target_direction = target_direction;

                self.reach(i, target, events);

                let agent = &self.agents[i];
                let slid = steering::slide_off(
                    &agent.position,
                    &dest_pos,
                    contact_dist,
                    agent.speed,
                    &mut self.rng,
                );
                self.agents[i].position = slid;
            }
        }
    }

    /// Resolves agent `i` touching `target`, then sends it back to wandering.
    fn reach(&mut self, i: usize, target: Target, events: &mut Vec<LiveEvent>) {
        let tick = self.tick;
        let at = self.agents[i].position;
        let agent_id = self.agents[i].id;

        match target {
            Target::Food(food_id) => {
                let Some(slot) = self.food_slot(food_id) else {
                    return;
                };
                let food = &mut self.foods[slot];
                food.status = FoodStatus::Reached;
                let utility = food.utility;
                self.census.foods = self.census.foods.saturating_sub(1);

                let agent = &mut self.agents[i];
                agent.hunger += utility;
                agent.ready_to_work = true;

                self.metrics.increment_counter(FOOD_EATEN);
                events.push(LiveEvent::FoodEaten {
                    agent_id,
                    food_id,
                    utility,
                    tick,
                    effect: effects::food_sparkle(at),
                });
            }
            Target::Agent(partner_id) => {
                let child = give_birth(&mut self.agents[i], &self.config.agent, &mut self.rng);
                self.agents[i].ready_to_work = true;

                let child_id = match child {
                    Some(child) => {
                        let id = child.id;
                        tracing::debug!(parent = %agent_id, child = %id, tick, "Agent born");
                        self.insert_agent(child);
                        self.metrics.increment_counter(BIRTHS);
                        Some(id)
                    }
                    None => None,
                };
                events.push(LiveEvent::MateReached {
                    agent_id,
                    partner_id,
                    child_id,
                    tick,
                    effect: effects::mate_confetti(at),
                });
            }
            Target::Site(site_id) => {
                let Some(slot) = self.site_slot(site_id) else {
                    return;
                };
                self.sites[slot].work_done += 1;

                let agent = &mut self.agents[i];
                agent.ready_to_work = false;
                let size = agent.size;

                self.metrics.increment_counter(SITE_VISITS);
                events.push(LiveEvent::SiteReached {
                    agent_id,
                    site_id,
                    tick,
                    effect: effects::work_pulse(at, size),
                });
            }
        }

        self.agents[i].status = AgentStatus::Doodle;
    }

    fn resolve_death(&mut self, i: usize, events: &mut Vec<LiveEvent>) {
        self.census.agents = self.census.agents.saturating_sub(1);
        let agent = &self.agents[i];
        let cause = death_cause(agent);
        tracing::debug!(
            id = %agent.id,
            age = agent.age,
            hunger = agent.hunger,
            births = agent.birth_count,
            cause = ?cause,
            tick = self.tick,
            "Agent died"
        );
        events.push(LiveEvent::Death {
            agent_id: agent.id,
            age: agent.age,
            births: agent.birth_count,
            cause,
            tick: self.tick,
            position: agent.position,
        });
        self.metrics.increment_counter(DEATHS);
    }

    /// Production round for every site, then removal of exhausted ones.
    fn run_sites(&mut self, events: &mut Vec<LiveEvent>) {
        let tick = self.tick;
        for idx in 0..self.sites.len() {
            let Some(count) = ecological::site_production(&mut self.sites[idx], &self.config.resources)
            else {
                continue;
            };
            for _ in 0..count {
                let position = self.random_position();
                let food = create_food_with_rng(position, &self.config.resources, &mut self.rng);
                self.insert_food(food);
            }
            self.metrics.add_to_counter(FOOD_PRODUCED, u64::from(count));

            let site = &self.sites[idx];
            tracing::debug!(site = %site.id, count, utility = site.utility, tick, "Site produced food");
            events.push(LiveEvent::FoodProduced {
                site_id: site.id,
                count,
                tick,
                effect: effects::production_pulse(
                    site.position,
                    site.size,
                    self.config.resources.max_utility,
                ),
            });
        }

        self.sites.retain(|site| {
            if site.is_exhausted() {
                tracing::debug!(site = %site.id, tick, "Site exhausted");
                events.push(LiveEvent::SiteExhausted {
                    site_id: site.id,
                    tick,
                    position: site.position,
                });
                false
            } else {
                true
            }
        });
    }
}
