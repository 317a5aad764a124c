use hostsmith::domain::Domain;
use hostsmith::targets::{Bind, DnsServerTarget, Unbound, Windows};
use hostsmith::writer;

fn domains(names: &[&str]) -> Vec<Domain> {
    names
        .iter()
        .map(|name| Domain::try_create(name).unwrap())
        .collect()
}

#[tokio::test]
async fn writes_every_target_to_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let targets: Vec<Box<dyn DnsServerTarget>> = vec![
        Box::new(Bind::new("/etc/bind/db.poison".to_string()).unwrap()),
        Box::new(Unbound),
        Box::new(Windows),
    ];
    let domains = domains(&["a.example"]);

    let outcomes = writer::write_all(dir.path(), &targets, &domains).await;
    assert!(outcomes.iter().all(|o| o.result.is_ok()));

    let bind = std::fs::read_to_string(dir.path().join("bind.txt")).unwrap();
    assert_eq!(
        bind,
        "zone \"a.example\" { type master; file \"/etc/bind/db.poison\"; };\n"
    );

    let unbound = std::fs::read_to_string(dir.path().join("unbound.txt")).unwrap();
    assert_eq!(unbound, "local-zone: \"a.example\" inform_deny.\n");

    let hosts = std::fs::read_to_string(dir.path().join("hosts")).unwrap();
    assert_eq!(hosts, "0.0.0.0 a.example\n");
}

#[tokio::test]
async fn failing_target_does_not_block_siblings() {
    let dir = tempfile::tempdir().unwrap();
    // A directory squatting on the Windows destination makes that open fail.
    std::fs::create_dir(dir.path().join("hosts")).unwrap();

    let targets: Vec<Box<dyn DnsServerTarget>> = vec![Box::new(Windows), Box::new(Unbound)];
    let domains = domains(&["a.example", "b.example"]);

    let outcomes = writer::write_all(dir.path(), &targets, &domains).await;
    assert!(outcomes[0].result.is_err());
    assert!(outcomes[1].result.is_ok());

    let unbound = std::fs::read_to_string(dir.path().join("unbound.txt")).unwrap();
    assert_eq!(
        unbound,
        "local-zone: \"a.example\" inform_deny.\nlocal-zone: \"b.example\" inform_deny.\n"
    );
}

#[tokio::test]
async fn appends_to_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("unbound.txt"), "# managed block\n").unwrap();

    let targets: Vec<Box<dyn DnsServerTarget>> = vec![Box::new(Unbound)];
    let domains = domains(&["a.example"]);

    let outcomes = writer::write_all(dir.path(), &targets, &domains).await;
    assert!(outcomes[0].result.is_ok());

    let unbound = std::fs::read_to_string(dir.path().join("unbound.txt")).unwrap();
    assert_eq!(
        unbound,
        "# managed block\nlocal-zone: \"a.example\" inform_deny.\n"
    );
}

#[tokio::test]
async fn empty_set_writes_no_lines() {
    let dir = tempfile::tempdir().unwrap();
    let targets: Vec<Box<dyn DnsServerTarget>> = vec![Box::new(Unbound)];

    let outcomes = writer::write_all(dir.path(), &targets, &[]).await;
    assert!(outcomes[0].result.is_ok());
    assert_eq!(outcomes[0].lines, 0);

    let unbound = std::fs::read_to_string(dir.path().join("unbound.txt")).unwrap();
    assert!(unbound.is_empty());
}
