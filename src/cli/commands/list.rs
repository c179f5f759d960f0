use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{FilterPeriod, filter_records};
use crate::errors::AppResult;
use crate::models::Record;
use crate::models::absence::AbsenceRecord;
use crate::models::punch::PunchRecord;
use crate::store::pool::StorePool;
use crate::store::register::{ABSENCES_KEY, PUNCHES_KEY, Register};
use crate::ui::messages::info;
use crate::utils::date;

/// One display row. The two sequences stay separately persisted; the list
/// view interleaves them by id (= creation order).
enum Entry {
    Punch(PunchRecord),
    Absence(AbsenceRecord),
}

impl Entry {
    fn id(&self) -> i64 {
        match self {
            Entry::Punch(r) => r.id(),
            Entry::Absence(r) => r.id(),
        }
    }
}

/// List records, filtered by period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        punches,
        absences,
    } = cmd
    {
        let pool = StorePool::new(&cfg.database)?;
        let filter = FilterPeriod::from_selector(period);
        let today = date::today();

        // No selector flag means both kinds.
        let show_punches = *punches || !*absences;
        let show_absences = *absences || !*punches;

        let mut entries: Vec<Entry> = Vec::new();

        if show_punches {
            let register = Register::<PunchRecord>::open(&pool.conn, PUNCHES_KEY)?;
            entries.extend(
                filter_records(register.records(), filter, today)
                    .into_iter()
                    .map(Entry::Punch),
            );
        }

        if show_absences {
            let register = Register::<AbsenceRecord>::open(&pool.conn, ABSENCES_KEY)?;
            entries.extend(
                filter_records(register.records(), filter, today)
                    .into_iter()
                    .map(Entry::Absence),
            );
        }

        entries.sort_by_key(|e| e.id());

        if entries.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        for entry in &entries {
            match entry {
                Entry::Punch(r) => print_punch(r),
                Entry::Absence(r) => print_absence(r),
            }
        }

        println!("\n{} record(s)", entries.len());
    }

    Ok(())
}

fn print_punch(r: &PunchRecord) {
    let location = r
        .location
        .map(|c| format!("  @ {}", c))
        .unwrap_or_default();

    println!(
        "#{:<15} {:<16} {} {}  {}{}",
        r.id,
        r.kind.label(),
        r.date,
        r.time,
        r.weekday,
        location
    );

    if let Some(comment) = &r.comment {
        println!("{:16}  {}", "", comment);
    }
}

fn print_absence(r: &AbsenceRecord) {
    println!("#{:<15} {:<16} {}", r.id, "Ausência", r.date);
    println!("{:16}  {}", "", r.comment);

    match &r.file_name {
        Some(name) => println!("{:16}  Arquivo: {}", "", name),
        None => println!("{:16}  Sem arquivo anexado", ""),
    }
}
