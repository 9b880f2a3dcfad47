//! Editor form declarations for the record editing modal
//!
//! One variant per editable record kind, each declaring its field list
//! and field kinds explicitly. The view layer renders whatever form the
//! variant describes, so adding a record kind means adding a variant
//! here, not another branch in the modal.

use crate::config::keys;

/// How a single form field is rendered and edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Select(&'static [&'static str]),
    ColorSwatch,
}

/// One field of an editor form. `name` is the record field the input
/// binds to, `label` the caption shown to the user.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn text(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { name, label, kind: FieldKind::Text }
}

/// Program categories offered by the editor.
pub const PROGRAM_CATEGORIES: &[&str] = &["Kurikulum", "HEM", "Kokurikulum", "Sukan"];

/// The record kinds the editor modal can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorForm {
    Relief,
    ClassTeacher,
    Speech,
    ScheduleSlot,
    SchoolWeek,
    ExamWeek,
    Teacher,
    Program,
    Announcement,
}

impl EditorForm {
    /// The fields this form edits, in display order.
    pub fn fields(self) -> Vec<FieldSpec> {
        match self {
            EditorForm::Relief => vec![
                text("time", "Masa"),
                text("class", "Kelas"),
                text("subject", "Subjek"),
                text("relief", "Guru Ganti"),
                text("absent", "Guru Tidak Hadir"),
            ],
            EditorForm::ClassTeacher => vec![text("teacherName", "Nama Guru Kelas")],
            EditorForm::Speech => vec![
                text("date", "Tarikh"),
                text("teacher", "Guru Bertugas"),
                text("topic", "Tajuk Ucapan"),
            ],
            EditorForm::ScheduleSlot => vec![
                text("subject", "Subjek"),
                text("code", "Kod"),
                text("info", "Catatan"),
                FieldSpec { name: "color", label: "Warna", kind: FieldKind::ColorSwatch },
            ],
            EditorForm::SchoolWeek => vec![
                text("week", "Minggu"),
                text("date", "Tarikh"),
                FieldSpec { name: "notes", label: "Catatan", kind: FieldKind::LongText },
                text("totalDays", "Jumlah Hari"),
                text("totalWeeks", "Jumlah Minggu"),
            ],
            EditorForm::ExamWeek => vec![
                text("week", "Minggu"),
                text("date", "Tarikh"),
                text("dalaman", "Peperiksaan Dalaman"),
                text("jaj", "Peperiksaan JAJ"),
                text("awam", "Peperiksaan Awam"),
            ],
            EditorForm::Teacher => vec![
                text("name", "Nama"),
                text("subject", "Subjek"),
                text("classes", "Kelas"),
            ],
            EditorForm::Program => vec![
                text("title", "Tajuk"),
                text("date", "Tarikh"),
                text("time", "Masa"),
                text("location", "Lokasi"),
                FieldSpec {
                    name: "category",
                    label: "Kategori",
                    kind: FieldKind::Select(PROGRAM_CATEGORIES),
                },
                FieldSpec { name: "description", label: "Keterangan", kind: FieldKind::LongText },
                text("image1", "Gambar 1"),
                text("image2", "Gambar 2"),
            ],
            EditorForm::Announcement => vec![
                text("title", "Tajuk"),
                text("date", "Tarikh"),
                FieldSpec { name: "summary", label: "Ringkasan", kind: FieldKind::LongText },
            ],
        }
    }

    /// Storage key of the custom module collection this form edits, when
    /// the records live outside the state container.
    pub fn storage_key(self) -> Option<&'static str> {
        match self {
            EditorForm::Relief => Some(keys::JADUAL_RELIEF),
            EditorForm::ClassTeacher => Some(keys::JADUAL_CLASS_TEACHERS),
            EditorForm::Speech => Some(keys::JADUAL_SPEECH),
            EditorForm::ScheduleSlot => Some(keys::JADUAL_SLOTS),
            EditorForm::SchoolWeek => Some(keys::TAKWIM_SCHOOL_WEEKS),
            EditorForm::ExamWeek => Some(keys::TAKWIM_EXAM_WEEKS),
            EditorForm::Teacher | EditorForm::Program | EditorForm::Announcement => None,
        }
    }
}
