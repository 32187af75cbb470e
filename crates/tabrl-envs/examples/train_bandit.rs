//! Train an epsilon-greedy bandit on a bank of slot machines and
//! replay the learned policy once.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tabrl::prelude::*;
use tabrl_envs::SlotMachines;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let num_machines = 10;
    let mut env = SlotMachines::new(num_machines);
    env.reset(Some(7));
    let mut rng = StdRng::seed_from_u64(7);

    println!("{}", env.render().unwrap_or_default());

    let mut agent =
        BanditAgent::new(BanditConfig::default())?.with_logger(Box::new(ConsoleLogger::new()));
    let out = agent.fit(&mut env, &mut rng, 5000, 20)?;

    println!("value estimates: {:?}", agent.value_estimates());
    println!("visit counts:    {:?}", agent.visit_counts());

    let traj = agent.predict(&mut env, &out.state_action_values, &mut rng)?;
    println!(
        "greedy episode: pulled arm {} for reward {}",
        traj.actions[0], traj.rewards[0]
    );

    Ok(())
}
