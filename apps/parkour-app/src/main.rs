//! Platformer environment CLI.
//!
//! Two modes of operation:
//! - `headless`: Run N episodes with a baseline policy and print statistics
//! - `info`: Print workspace crate versions and the default configuration

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use glam::Vec3;

use parkour_core::config::EnvConfig;
use parkour_core::error::ParkourError;
use parkour_core::seed::derive_seed;
use parkour_core::types::ActionCommand;
use parkour_env::body::{HostBody, PointMass};
use parkour_env::controller::Controller;
use parkour_env::reach::ReachAgent;
use parkour_env::runner::RunnerAgent;
use parkour_env::scene::{ContactEvent, ContactPhase, EntityKind};
use parkour_env::world::PlatformWorld;
use parkour_gym::{ConstantPolicy, GymEnv, Policy, RandomPolicy, ZeroPolicy};

/// Hit radius for the demo course's host-side contact detection.
const CONTACT_RADIUS: f32 = 0.5;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Platformer reinforcement learning environment.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run episodes locally and print statistics.
    Headless {
        /// Number of episodes to run.
        #[arg(short = 'n', long, default_value_t = 1)]
        episodes: u32,

        /// Maximum steps per episode.
        #[arg(short, long, default_value_t = 1000)]
        max_steps: u32,

        /// Run seed (overrides the config file).
        #[arg(short, long)]
        seed: Option<u64>,

        /// Environment variant.
        #[arg(short, long, value_enum, default_value_t = Variant::Reach)]
        variant: Variant,

        /// Baseline policy.
        #[arg(short, long, value_enum, default_value_t = PolicyKind::Random)]
        policy: PolicyKind,

        /// Path to a TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print crate information and the default configuration.
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    /// Free planar movement toward a randomized goal.
    Reach,
    /// Side-scroller with jump, shaping, and contacts.
    Runner,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyKind {
    /// All-zero actions.
    Zero,
    /// Uniform random actions.
    Random,
    /// Constant full-throttle +x.
    Forward,
}

// ---------------------------------------------------------------------------
// Rollouts
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct RolloutStats {
    episodes: u32,
    total_steps: u32,
    total_reward: f32,
    terminated: u32,
    truncated: u32,
}

/// Run `episodes` rollouts, letting the caller hook world setup after
/// each reset and host-side work after each step.
fn rollout<C, B>(
    env: &mut GymEnv<C, B>,
    policy: &mut dyn Policy,
    episodes: u32,
    max_steps: u32,
    mut on_reset: impl FnMut(&mut GymEnv<C, B>),
    mut after_step: impl FnMut(&mut GymEnv<C, B>),
) -> RolloutStats
where
    C: Controller<B>,
    B: HostBody,
{
    let mut stats = RolloutStats::default();

    for ep in 0..episodes {
        let reset = env.reset(None);
        on_reset(env);
        let mut obs = reset.observation;

        let mut last = None;
        for _ in 0..max_steps {
            let action = policy.action(&obs);
            let result = env.step(&action);
            after_step(env);
            obs = result.observation.clone();
            let done = result.terminated || result.truncated;
            last = Some(result);
            if done {
                break;
            }
        }

        let episode = env.episode();
        stats.episodes += 1;
        stats.total_steps += episode.steps;
        stats.total_reward += episode.score;
        if let Some(result) = last {
            if result.terminated {
                stats.terminated += 1;
            }
            if result.truncated {
                stats.truncated += 1;
            }
            println!(
                "episode {}: steps={}, reward={:.3}, terminated={}, truncated={}, distance={:.2}",
                ep + 1,
                episode.steps,
                episode.score,
                result.terminated,
                result.truncated,
                result.info.distance_to_goal,
            );
        }
    }

    stats
}

/// Place a short token course along +x for the runner demo.
fn spawn_course(world: &mut PlatformWorld<PointMass>) {
    for i in 1..=3 {
        #[allow(clippy::cast_precision_loss)]
        let x = 2.0 * i as f32;
        world.scene.spawn(EntityKind::Token, Vec3::new(x, 0.0, 0.0));
    }
}

/// Host-side proximity contact check for the demo course.
fn detect_contacts(env: &mut GymEnv<RunnerAgent, PointMass>) {
    let pos = env.world().agent.position();
    let hits: Vec<ContactEvent> = env
        .world()
        .scene
        .alive()
        .filter(|e| e.position.distance(pos) < CONTACT_RADIUS)
        .map(|e| ContactEvent::new(e.id, e.kind, ContactPhase::Solid))
        .collect();
    for event in hits {
        env.push_contact(event);
    }
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn make_policy(kind: PolicyKind, action_dim: usize, seed: u64) -> Box<dyn Policy> {
    match kind {
        PolicyKind::Zero => Box::new(ZeroPolicy),
        PolicyKind::Forward => Box::new(ConstantPolicy::new(ActionCommand::new(1.0, 0.0))),
        PolicyKind::Random => {
            let mut low = vec![-1.0; action_dim];
            let high = vec![1.0; action_dim];
            if action_dim >= 3 {
                low[2] = 0.0;
            }
            Box::new(RandomPolicy::new(
                parkour_core::types::ActionSpace::Box { low, high },
                derive_seed(seed, "policy"),
            ))
        }
    }
}

fn run_headless(
    episodes: u32,
    max_steps: u32,
    seed: Option<u64>,
    variant: Variant,
    policy: PolicyKind,
    config: Option<&PathBuf>,
) -> Result<(), ParkourError> {
    let mut cfg = match config {
        Some(path) => EnvConfig::from_file(path)?,
        None => EnvConfig::default(),
    };
    cfg.max_episode_steps = max_steps;
    if let Some(seed) = seed {
        cfg.seed = seed;
    }

    let stats = match variant {
        Variant::Reach => {
            let mut env = GymEnv::new(ReachAgent::new(cfg.clone()), PointMass::new(), cfg.clone());
            let mut policy = make_policy(policy, 2, cfg.seed);
            println!("reach: policy={}, episodes={episodes}", policy.name());
            rollout(&mut env, policy.as_mut(), episodes, max_steps, |_| {}, |_| {})
        }
        Variant::Runner => {
            let body = PointMass::new().with_gravity(cfg.gravity).with_floor(0.0);
            let mut env = GymEnv::new(RunnerAgent::new(cfg.clone()), body, cfg.clone());
            let mut policy = make_policy(policy, 3, cfg.seed);
            println!("runner: policy={}, episodes={episodes}", policy.name());
            rollout(
                &mut env,
                policy.as_mut(),
                episodes,
                max_steps,
                |env| spawn_course(env.world_mut()),
                detect_contacts,
            )
        }
    };

    let mean_reward = if stats.episodes > 0 {
        #[allow(clippy::cast_precision_loss)]
        let n = stats.episodes as f32;
        stats.total_reward / n
    } else {
        0.0
    };
    println!(
        "\ntotal: episodes={}, steps={}, mean_reward={:.3}, terminated={}, truncated={}",
        stats.episodes, stats.total_steps, mean_reward, stats.terminated, stats.truncated
    );
    Ok(())
}

fn run_info() {
    println!("parkour v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  parkour-core   {}", env!("CARGO_PKG_VERSION"));
    println!("  parkour-env    {}", env!("CARGO_PKG_VERSION"));
    println!("  parkour-teleop {}", env!("CARGO_PKG_VERSION"));
    println!("  parkour-gym    {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
    println!();
    match toml::to_string_pretty(&EnvConfig::default()) {
        Ok(toml) => println!("default configuration:\n{toml}"),
        Err(e) => eprintln!("failed to render default configuration: {e}"),
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Headless {
            episodes,
            max_steps,
            seed,
            variant,
            policy,
            config,
        }) => run_headless(episodes, max_steps, seed, variant, policy, config.as_ref()),
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
        None => {
            // Default: one reach episode with a random policy.
            run_headless(
                1,
                1000,
                None,
                Variant::Reach,
                PolicyKind::Random,
                None,
            )
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
