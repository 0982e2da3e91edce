//! Per-theme file explorer entries.
//!
//! The list is flat. `depth` is only an indentation hint: no parent/child
//! relationship is implied or checked, so an entry may claim any depth
//! regardless of what precedes it.

use crate::key::ThemeKey;

/// Whether an entry renders as a folder or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Folder,
    File,
}

/// One row of the file explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    pub name: &'static str,
    pub kind: FileKind,
    pub depth: u8,
}

impl FileEntry {
    pub const fn folder(name: &'static str, depth: u8) -> Self {
        Self {
            name,
            kind: FileKind::Folder,
            depth,
        }
    }

    pub const fn file(name: &'static str, depth: u8) -> Self {
        Self {
            name,
            kind: FileKind::File,
            depth,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == FileKind::Folder
    }

    /// Files marked `FINAL` get the alarm treatment in the explorer.
    pub fn is_flagged(&self) -> bool {
        self.kind == FileKind::File && self.name.contains("FINAL")
    }
}

/// File explorer entries for a theme, in display order.
pub fn files(key: ThemeKey) -> &'static [FileEntry] {
    match key {
        ThemeKey::Standard => STANDARD,
        ThemeKey::Corporate => CORPORATE,
        ThemeKey::Cpp => CPP,
        ThemeKey::Asm => ASM,
        ThemeKey::Chaos => CHAOS,
    }
}

static STANDARD: &[FileEntry] = &[
    FileEntry::folder("src", 0),
    FileEntry::folder("main", 1),
    FileEntry::folder("java", 2),
    FileEntry::folder("com", 3),
    FileEntry::folder("enterprise", 4),
    FileEntry::file("HelloWorldFactory.java", 5),
    FileEntry::file("AbstractPrinter.java", 5),
];

static CORPORATE: &[FileEntry] = &[
    FileEntry::folder("Deliverables", 0),
    FileEntry::folder("Q4_FY2024", 1),
    FileEntry::folder("Legal", 2),
    FileEntry::file("Hello_World_Proposal_v12_FINAL.pptx", 3),
    FileEntry::file("Budget_Approval.xlsx", 3),
    FileEntry::file("Dismissal_Letters_Template.docx", 3),
];

static CPP: &[FileEntry] = &[
    FileEntry::folder("include", 0),
    FileEntry::file("legacy_wrapper.h", 1),
    FileEntry::folder("src", 0),
    FileEntry::folder("unsafe_pointers", 1),
    FileEntry::file("main.cpp", 2),
    FileEntry::file("segmentation_fault_handler.c", 2),
    FileEntry::file("Makefile", 0),
];

static ASM: &[FileEntry] = &[
    FileEntry::folder("boot", 0),
    FileEntry::file("mbr.asm", 1),
    FileEntry::file("kernel.s", 1),
    FileEntry::folder("drivers", 0),
    FileEntry::file("vga_print.asm", 1),
    FileEntry::file("keyboard_isr.asm", 1),
    FileEntry::file("linker.ld", 0),
    FileEntry::file("make.sh", 0),
];

static CHAOS: &[FileEntry] = &[
    FileEntry::folder("̷r̷o̷o̷t̷", 0),
    FileEntry::folder("n̸u̸l̸l̸", 1),
    FileEntry::file("0xFE4A.bin", 2),
    FileEntry::file("run_away.exe", 2),
    FileEntry::file("DONT_OPEN.txt", 0),
];
