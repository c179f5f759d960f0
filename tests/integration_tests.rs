use predicates::str::contains;

mod common;
use common::{open_store, plg, punch_record, setup_test_store};

use pontolog::models::punch_type::PunchType;
use pontolog::store::register::{PUNCHES_KEY, Register};

#[test]
fn test_init_creates_store() {
    let store = setup_test_store("cli_init");

    plg()
        .args(["--db", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store initialized"));
}

#[test]
fn test_first_punch_defaults_to_entrada() {
    let store = setup_test_store("cli_first_punch");

    plg()
        .args(["--db", &store, "--test", "init"])
        .assert()
        .success();

    plg()
        .args(["--db", &store, "--test", "punch"])
        .assert()
        .success()
        .stdout(contains("Recorded Entrada"))
        .stdout(contains("Next suggested punch: Intervalo"));

    // The cycle advances on the next default punch.
    plg()
        .args(["--db", &store, "--test", "punch"])
        .assert()
        .success()
        .stdout(contains("Recorded Intervalo"))
        .stdout(contains("Next suggested punch: Volta intervalo"));
}

#[test]
fn test_explicit_punch_type_accepted_out_of_order() {
    let store = setup_test_store("cli_out_of_order");

    plg()
        .args(["--db", &store, "--test", "punch", "saida"])
        .assert()
        .success()
        .stdout(contains("Recorded Saída"))
        .stdout(contains("Next suggested punch: Entrada"));
}

#[test]
fn test_invalid_punch_type_is_rejected() {
    let store = setup_test_store("cli_bad_type");

    plg()
        .args(["--db", &store, "--test", "punch", "almoco"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch type"));
}

#[test]
fn test_next_command_reports_suggestion() {
    let store = setup_test_store("cli_next");

    plg()
        .args(["--db", &store, "--test", "next"])
        .assert()
        .success()
        .stdout(contains("Next suggested punch: Entrada"));

    plg()
        .args(["--db", &store, "--test", "punch", "volta-intervalo"])
        .assert()
        .success();

    plg()
        .args(["--db", &store, "--test", "next"])
        .assert()
        .success()
        .stdout(contains("Last punch: Volta intervalo"))
        .stdout(contains("Next suggested punch: Saída"));
}

#[test]
fn test_punch_with_location_and_comment() {
    let store = setup_test_store("cli_location");

    plg()
        .args([
            "--db",
            &store,
            "--test",
            "punch",
            "entrada",
            "--comment",
            "chegada ao escritório",
            "--location",
            "-23.5505,-46.6333",
        ])
        .assert()
        .success()
        .stdout(contains("Location: -23.5505,-46.6333"));

    plg()
        .args(["--db", &store, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("chegada ao escritório"));
}

#[test]
fn test_malformed_location_degrades_to_absent() {
    let store = setup_test_store("cli_bad_location");

    // Creation still succeeds; the failure only goes to the diagnostics log.
    plg()
        .args([
            "--db",
            &store,
            "--test",
            "punch",
            "entrada",
            "--location",
            "nowhere",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded Entrada"));

    plg()
        .args(["--db", &store, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("location"));
}

#[test]
fn test_punch_backfill_and_list_period_all() {
    let store = setup_test_store("cli_backfill");

    plg()
        .args([
            "--db", &store, "--test", "punch", "entrada", "--date", "01/03/2024", "--time",
            "08:00:00",
        ])
        .assert()
        .success()
        .stdout(contains("01/03/2024 08:00:00"))
        .stdout(contains("Sexta-feira"));

    plg()
        .args(["--db", &store, "--test", "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("Entrada"))
        .stdout(contains("01/03/2024"))
        .stdout(contains("1 record(s)"));
}

#[test]
fn test_list_period_month_excludes_backfilled_past_dates() {
    let store = setup_test_store("cli_period_month");

    plg()
        .args([
            "--db", &store, "--test", "punch", "entrada", "--date", "01/03/2024", "--time",
            "08:00:00",
        ])
        .assert()
        .success();

    plg()
        .args(["--db", &store, "--test", "list", "--period", "month"])
        .assert()
        .success()
        .stdout(contains("No records for the selected period."));

    plg()
        .args(["--db", &store, "--test", "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("1 record(s)"));
}

#[test]
fn test_absence_with_and_without_file() {
    let store = setup_test_store("cli_absence");

    plg()
        .args([
            "--db",
            &store,
            "--test",
            "absence",
            "--comment",
            "Consulta médica",
            "--file",
            "atestado.pdf",
        ])
        .assert()
        .success()
        .stdout(contains("Attached file: atestado.pdf"));

    plg()
        .args([
            "--db",
            &store,
            "--test",
            "absence",
            "--comment",
            "Problema familiar",
        ])
        .assert()
        .success()
        .stdout(contains("No file attached"));

    plg()
        .args(["--db", &store, "--test", "list", "--absences"])
        .assert()
        .success()
        .stdout(contains("Arquivo: atestado.pdf"))
        .stdout(contains("Sem arquivo anexado"))
        .stdout(contains("2 record(s)"));
}

#[test]
fn test_edit_by_id_and_unknown_id_noop() {
    let store = setup_test_store("cli_edit");
    let conn = open_store(&store);

    let mut reg = Register::open(&conn, PUNCHES_KEY).unwrap();
    reg.append(punch_record(4242, "01/03/2024", "08:00:00", PunchType::Entrada))
        .unwrap();
    drop(reg);
    drop(conn);

    plg()
        .args([
            "--db", &store, "--test", "edit", "4242", "--time", "08:15:00", "--comment",
            "ajustado",
        ])
        .assert()
        .success()
        .stdout(contains("Record #4242 updated."));

    plg()
        .args(["--db", &store, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("08:15:00"))
        .stdout(contains("ajustado"));

    // Unknown id: quiet no-op, successful exit.
    plg()
        .args(["--db", &store, "--test", "edit", "999999", "--comment", "x"])
        .assert()
        .success()
        .stdout(contains("No record with id 999999."));
}

#[test]
fn test_del_by_id_is_idempotent() {
    let store = setup_test_store("cli_del");
    let conn = open_store(&store);

    let mut reg = Register::open(&conn, PUNCHES_KEY).unwrap();
    reg.append(punch_record(1111, "01/03/2024", "08:00:00", PunchType::Entrada))
        .unwrap();
    reg.append(punch_record(2222, "01/03/2024", "12:00:00", PunchType::Intervalo))
        .unwrap();
    drop(reg);
    drop(conn);

    plg()
        .args(["--db", &store, "--test", "del", "1111", "-y"])
        .assert()
        .success()
        .stdout(contains("Record #1111 has been deleted."));

    plg()
        .args(["--db", &store, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2222"))
        .stdout(contains("1 record(s)"));

    // Deleting the same id again is a no-op.
    plg()
        .args(["--db", &store, "--test", "del", "1111", "-y"])
        .assert()
        .success()
        .stdout(contains("No record with id 1111."));
}

#[test]
fn test_config_check_before_init_is_not_an_error() {
    // Point the config lookup at an empty home so no config file exists.
    let mut home = std::env::temp_dir();
    home.push("cli_cfg_check_home");
    std::fs::create_dir_all(&home).unwrap();

    plg()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("No config file yet"));
}

#[test]
fn test_log_records_punch_operations() {
    let store = setup_test_store("cli_log");

    plg()
        .args(["--db", &store, "--test", "punch", "entrada"])
        .assert()
        .success();

    plg()
        .args(["--db", &store, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("punch"))
        .stdout(contains("punches"));
}
