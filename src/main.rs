use anyhow::Context;

use pokerbot::base::player::Player;
use pokerbot::engine::engine_client::{parse_args, run_bot};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    let player = Player::new(args.strategy.build(args.seed));
    run_bot(player, &args).with_context(|| format!("playing against {}:{}", args.host, args.port))
}
