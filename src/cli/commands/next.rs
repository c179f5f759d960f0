use crate::config::Config;
use crate::core::sequencer::Sequencer;
use crate::errors::AppResult;
use crate::store::pool::StorePool;
use crate::ui::messages::info;

/// Show the suggested type for the next punch.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = StorePool::new(&cfg.database)?;
    let sequencer = Sequencer::open(&pool.conn)?;

    match sequencer.last() {
        Some(last) => info(format!("Last punch: {}", last.label())),
        None => info("No punches recorded yet"),
    }
    println!("Next suggested punch: {}", sequencer.suggest_next().label());

    Ok(())
}
