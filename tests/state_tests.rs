use std::path::Path;

use esekolah_pintar::config::{keys, DashboardOptions, DEFAULT_SCRIPT_URL};
use esekolah_pintar::registry::ModuleRegistry;
use esekolah_pintar::state::{next_id, Announcement, AppState, Program, Role, SiteConfigPatch, Teacher};
use esekolah_pintar::storage::{LocalStore, SessionStore};
use esekolah_pintar::Dashboard;
use tempfile::tempdir;

fn open_state(path: &Path) -> AppState {
    let store = LocalStore::open(path).unwrap();
    AppState::load(
        store,
        SessionStore::new(),
        ModuleRegistry::default(),
        &DashboardOptions::default(),
    )
}

fn sample_teacher(id: &str) -> Teacher {
    Teacher {
        id: id.to_string(),
        name: "Cikgu Baru".to_string(),
        subject: "Sejarah".to_string(),
        classes: vec!["1 Amanah".to_string()],
    }
}

#[test]
fn permission_change_survives_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = open_state(&path);
    let mut permissions = state.permissions().clone();
    permissions.kurikulum = false;
    state.update_permissions(permissions).unwrap();
    drop(state);

    let state = open_state(&path);
    assert!(!state.permissions().kurikulum);
    assert!(state.permissions().pentadbiran);
    assert!(state.permissions().laporan);
}

#[test]
fn teachers_append_and_persist() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = open_state(&path);
    let before = state.teachers().len();
    state.add_teacher(sample_teacher("T900")).unwrap();
    assert_eq!(state.teachers().last().unwrap().id, "T900");
    assert_eq!(state.teachers().len(), before + 1);
    assert_eq!(state.notice(), Some("Guru ditambah"));
    drop(state);

    let state = open_state(&path);
    assert_eq!(state.teachers().last().unwrap().id, "T900");
}

#[test]
fn announcements_and_programs_prepend() {
    let dir = tempdir().unwrap();
    let mut state = open_state(&dir.path().join("state.json"));

    state.add_announcement(Announcement {
        id: 99,
        title: "Baru".to_string(),
        date: "01-01-2027".to_string(),
        summary: "Ringkasan".to_string(),
        views: 0,
        likes: 0,
    });
    assert_eq!(state.announcements()[0].id, 99);

    let program_id = next_id();
    state.add_program(Program {
        id: program_id,
        title: "Program Baru".to_string(),
        date: "02-01-2027".to_string(),
        time: None,
        location: None,
        category: "HEM".to_string(),
        description: "Keterangan".to_string(),
        image1: None,
        image2: None,
    });
    assert_eq!(state.programs()[0].id, program_id);
}

#[test]
fn announcement_update_and_delete_are_keyed_by_id() {
    let dir = tempdir().unwrap();
    let mut state = open_state(&dir.path().join("state.json"));

    let mut updated = state.announcements()[1].clone();
    updated.title = "Tajuk Dipinda".to_string();
    state.update_announcement(updated.clone());
    assert_eq!(state.announcements()[1].title, "Tajuk Dipinda");

    state.delete_announcement(updated.id);
    assert!(state.announcements().iter().all(|a| a.id != updated.id));
    assert_eq!(state.notice(), Some("Pengumuman dipadam"));
}

#[test]
fn dashboard_open_wires_the_container() {
    let dir = tempdir().unwrap();
    let dashboard = Dashboard::open(dir.path().join("state.json")).unwrap();
    assert!(dashboard.state.permissions().pentadbiran);
    assert_eq!(dashboard.state.active_view(), "Dashboard");
    assert!(!dashboard.sync.is_syncing());
}

#[test]
fn delete_program_removes_only_the_target() {
    let dir = tempdir().unwrap();
    let mut state = open_state(&dir.path().join("state.json"));

    let ids: Vec<i64> = state.programs().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    state.delete_program(2);
    let ids: Vec<i64> = state.programs().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(state.notice(), Some("Program dipadam"));
}

#[test]
fn update_teacher_replaces_by_id_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut state = open_state(&path);

    let mut updated = state.teachers()[1].clone();
    assert_eq!(updated.id, "T002");
    updated.subject = "Fizik".to_string();
    state.update_teacher(updated).unwrap();

    assert_eq!(state.teachers()[1].subject, "Fizik");
    assert_eq!(state.teachers()[0].id, "T001");
    drop(state);

    let state = open_state(&path);
    assert_eq!(state.teachers()[1].subject, "Fizik");
}

#[test]
fn login_and_logout_manage_the_session_identity() {
    let dir = tempdir().unwrap();
    let mut state = open_state(&dir.path().join("state.json"));

    state.login("aminah", Role::AdminSistem).unwrap();
    let user = state.user().unwrap();
    assert_eq!(user.username, "aminah");
    assert_eq!(user.name, "Admin Sistem");
    assert_eq!(state.notice(), Some("Selamat datang, Admin Sistem"));

    state.set_active_view("Takwim");
    state.logout();
    assert!(state.user().is_none());
    assert_eq!(state.active_view(), "Dashboard");
    assert_eq!(state.notice(), Some("Log keluar berjaya"));
}

#[test]
fn stale_script_url_is_migrated_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut store = LocalStore::open(&path).unwrap();
    store
        .set_raw(
            keys::SITE_CONFIG,
            r#"{"systemTitle":"Tajuk Lama","schoolName":"SMAAM","welcomeMessage":"Salam","googleScriptUrl":"https://script.google.com/macros/s/AKfycbxpzq6lpFYRe7QQ6lGF7J123/exec"}"#,
        )
        .unwrap();
    drop(store);

    let state = open_state(&path);
    assert_eq!(
        state.site_config().google_script_url.as_deref(),
        Some(DEFAULT_SCRIPT_URL)
    );
    // the rest of the stored config is kept
    assert_eq!(state.site_config().system_title, "Tajuk Lama");
}

#[test]
fn legacy_comma_joined_classes_load_as_a_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut store = LocalStore::open(&path).unwrap();
    store
        .set_raw(
            keys::TEACHERS,
            r#"[{"id":"T010","name":"Cikgu Lama","subject":"Geografi","classes":"2 Bestari, 3 Amanah"}]"#,
        )
        .unwrap();
    drop(store);

    let state = open_state(&path);
    assert_eq!(state.teachers().len(), 1);
    assert_eq!(state.teachers()[0].classes, vec!["2 Bestari", "3 Amanah"]);
}

#[test]
fn corrupt_permissions_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut store = LocalStore::open(&path).unwrap();
    store.set_raw(keys::PERMISSIONS, "{rosak!").unwrap();
    store.set_raw(keys::JADUAL_RELIEF, r#"[{"id":1}]"#).unwrap();
    drop(store);

    // one bad key neither aborts the load nor touches other keys
    let state = open_state(&path);
    assert!(state.permissions().kurikulum);
    assert!(state.store().get_raw(keys::JADUAL_RELIEF).is_some());
}

#[test]
fn site_config_patch_merges_and_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = open_state(&path);
    let title_before = state.site_config().system_title.clone();
    state
        .update_site_config(SiteConfigPatch {
            welcome_message: Some("Salam sejahtera".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(state.site_config().welcome_message, "Salam sejahtera");
    assert_eq!(state.site_config().system_title, title_before);
    drop(state);

    let state = open_state(&path);
    assert_eq!(state.site_config().welcome_message, "Salam sejahtera");
}

#[test]
fn school_profile_update_is_write_through() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = open_state(&path);
    let mut profile = state.school_profile().clone();
    profile.motto = "ILMU PELITA HIDUP".to_string();
    state.update_school_profile(profile).unwrap();
    assert_eq!(state.notice(), Some("Profil sekolah dikemaskini"));
    drop(state);

    let state = open_state(&path);
    assert_eq!(state.school_profile().motto, "ILMU PELITA HIDUP");
}
