//! Seed data used on first run, before anything has been persisted

use crate::config::DEFAULT_SCRIPT_URL;

use super::types::{Announcement, Program, SchoolProfile, SiteConfig, Student, Teacher};

/// Site configuration shipped with the dashboard.
pub fn site_config() -> SiteConfig {
    SiteConfig {
        system_title: "PENGURUSAN DIGITAL SMAAM".to_string(),
        school_name: "SMA Al-Khairiah Al-Islamiah Mersing".to_string(),
        welcome_message: "Selamat Datang ke Dashboard Utama".to_string(),
        google_script_url: Some(DEFAULT_SCRIPT_URL.to_string()),
    }
}

/// School profile shipped with the dashboard.
pub fn school_profile() -> SchoolProfile {
    SchoolProfile {
        principal_name: "Zulkeffle bin Muhammad".to_string(),
        principal_title: "Pengetua SMAAM".to_string(),
        principal_image: "https://i.postimg.cc/GpTZX8V9/us-zul.png".to_string(),
        principal_quote: "Selamat datang ke SMA Al-Khairiah Al-Islamiah Mersing. Bersama-sama kita membentuk generasi ulul albab yang cemerlang di dunia dan akhirat.".to_string(),
        school_code: "JFT4001".to_string(),
        school_address: "Jalan Dato' Onn, 86800 Mersing, Johor".to_string(),
        school_email: "jft4001@moe.edu.my".to_string(),
        school_phone: "07-7996272".to_string(),
        school_grade: "A | Luar Bandar".to_string(),
        student_count: "650".to_string(),
        teacher_count: "45".to_string(),
        mission: "Mengekalkan kegemilangan sekolah dan melahirkan generasi berilmu, beramal dan bertaqwa.".to_string(),
        vision: "Pendidikan Berkualiti, Insan Terdidik, Negara Sejahtera.".to_string(),
        motto: "ILMU. IMAN. AMAL.".to_string(),
        slogan: "SMAAM Gemilang!".to_string(),
        charter: "Kami komited untuk menyampaikan pendidikan yang holistik dan berkualiti kepada setiap pelajar bagi memastikan potensi individu dapat dikembangkan secara menyeluruh.".to_string(),
    }
}

/// Announcements shown before any data has been synced.
pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Mesyuarat Agung PIBG Kali Ke-15".to_string(),
            date: "25-10-2026".to_string(),
            summary: "Semua ibu bapa dan guru dijemput hadir ke Dewan Utama bermula jam 8.00 pagi.".to_string(),
            views: 124,
            likes: 45,
        },
        Announcement {
            id: 2,
            title: "Cuti Peristiwa Sempena Sukan Tahunan".to_string(),
            date: "01-11-2026".to_string(),
            summary: "Sekolah akan bercuti pada hari Isnin sebagai cuti peristiwa.".to_string(),
            views: 312,
            likes: 89,
        },
    ]
}

/// Programs shown before any data has been synced.
pub fn programs() -> Vec<Program> {
    vec![
        Program {
            id: 1,
            title: "Minggu Bahasa & Budaya".to_string(),
            date: "15-11-2026".to_string(),
            time: Some("08:00 Pagi".to_string()),
            location: Some("Dewan Terbuka SMAAM".to_string()),
            category: "Kurikulum".to_string(),
            description: "Pertandingan pidato, sajak dan penulisan esei yang melibatkan semua pelajar tingkatan 1 hingga 5. Program ini bertujuan memartabatkan bahasa kebangsaan.".to_string(),
            image1: Some("https://images.unsplash.com/photo-1544531586-fde5298cdd40?q=80&w=600&auto=format&fit=crop".to_string()),
            image2: Some("https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8?q=80&w=600&auto=format&fit=crop".to_string()),
        },
        Program {
            id: 2,
            title: "Kem Kepimpinan Pengawas".to_string(),
            date: "20-11-2026".to_string(),
            time: Some("03:00 Petang".to_string()),
            location: Some("Kem Bina Negara, Mersing".to_string()),
            category: "HEM".to_string(),
            description: "Program jati diri untuk semua pengawas lantikan baharu bagi sesi 2027. Aktiviti lasak dan ceramah kepimpinan akan dijalankan selama 3 hari 2 malam.".to_string(),
            image1: Some("https://images.unsplash.com/photo-1517486808906-6ca8b3f04846?q=80&w=600&auto=format&fit=crop".to_string()),
            image2: None,
        },
        Program {
            id: 3,
            title: "Kejohanan Futsal Antara Rumah".to_string(),
            date: "05-12-2026".to_string(),
            time: Some("08:00 Pagi".to_string()),
            location: Some("Gelanggang Futsal Komuniti".to_string()),
            category: "Sukan".to_string(),
            description: "Saringan akhir di padang sekolah. Semua rumah sukan wajib menghantar wakil.".to_string(),
            image1: Some("https://images.unsplash.com/photo-1574629810360-7efbbe195018?q=80&w=600&auto=format&fit=crop".to_string()),
            image2: None,
        },
    ]
}

/// Teacher directory shown before any data has been persisted.
pub fn teachers() -> Vec<Teacher> {
    vec![
        Teacher {
            id: "T001".to_string(),
            name: "Cikgu Murni".to_string(),
            subject: "Bahasa Melayu".to_string(),
            classes: vec!["5 Bestari".to_string(), "4 Cerdik".to_string()],
        },
        Teacher {
            id: "T002".to_string(),
            name: "Mr. Wilson".to_string(),
            subject: "Matematik".to_string(),
            classes: vec!["5 Bestari".to_string(), "3 Amanah".to_string()],
        },
        Teacher {
            id: "T003".to_string(),
            name: "Puan Devi".to_string(),
            subject: "Sains".to_string(),
            classes: vec!["4 Cerdik".to_string(), "3 Amanah".to_string()],
        },
    ]
}

/// Sample students used by report previews.
pub fn students() -> Vec<Student> {
    vec![
        Student { id: "S001".to_string(), name: "Ahmad Albab".to_string(), grade: "5 Bestari".to_string(), attendance: 95, average_score: 88, behavior_score: 9 },
        Student { id: "S002".to_string(), name: "Siti Nurhaliza".to_string(), grade: "5 Bestari".to_string(), attendance: 98, average_score: 92, behavior_score: 10 },
        Student { id: "S003".to_string(), name: "Chong Wei".to_string(), grade: "4 Cerdik".to_string(), attendance: 85, average_score: 76, behavior_score: 7 },
        Student { id: "S004".to_string(), name: "Muthu Sami".to_string(), grade: "4 Cerdik".to_string(), attendance: 92, average_score: 81, behavior_score: 8 },
        Student { id: "S005".to_string(), name: "Jessica Tan".to_string(), grade: "3 Amanah".to_string(), attendance: 78, average_score: 65, behavior_score: 6 },
        Student { id: "S006".to_string(), name: "Farid Kamil".to_string(), grade: "5 Bestari".to_string(), attendance: 88, average_score: 70, behavior_score: 8 },
    ]
}
