//! Per-theme display strings.

use crate::key::ThemeKey;

/// The eight strings a theme contributes to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeContent {
    /// Product name shown in the header.
    pub system_name: &'static str,
    /// Status text logged by the kernel after an execution.
    pub status: &'static str,
    /// Label of the execute button.
    pub execute_label: &'static str,
    /// Title of the log panel.
    pub logs_title: &'static str,
    /// Title of the file panel.
    pub files_title: &'static str,
    /// Message shown in the locked output area.
    pub output_locked: &'static str,
    /// Security warning badge in the header.
    pub security_warning: &'static str,
    /// Resource usage badge in the header.
    pub resource_usage: &'static str,
}

impl ThemeContent {
    /// All fields in declaration order.
    pub fn fields(&self) -> [&'static str; 8] {
        [
            self.system_name,
            self.status,
            self.execute_label,
            self.logs_title,
            self.files_title,
            self.output_locked,
            self.security_warning,
            self.resource_usage,
        ]
    }
}

/// Strings for a theme.
pub fn content(key: ThemeKey) -> &'static ThemeContent {
    match key {
        ThemeKey::Standard => &STANDARD,
        ThemeKey::Corporate => &CORPORATE,
        ThemeKey::Cpp => &CPP,
        ThemeKey::Asm => &ASM,
        ThemeKey::Chaos => &CHAOS,
    }
}

static STANDARD: ThemeContent = ThemeContent {
    system_name: "HelloWorld Pro Max",
    status: "System Ready",
    execute_label: "Execute Sequence",
    logs_title: "System Logs",
    files_title: "Project Explorer",
    output_locked: "Output Stream Locked",
    security_warning: "Unsecure Connection",
    resource_usage: "CPU Usage",
};

static CORPORATE: ThemeContent = ThemeContent {
    system_name: "Global Synergy Solution v1.0",
    status: "Aligning Key Stakeholders...",
    execute_label: "Leverage Core Competencies",
    logs_title: "Audit Trail",
    files_title: "Asset Management Silo",
    output_locked: "Deliverable Pending Approval",
    security_warning: "Compliance Risk Detected",
    resource_usage: "Resource Allocation",
};

static CPP: ThemeContent = ThemeContent {
    system_name: "std::cout << obj.toString()",
    status: "return 0;",
    execute_label: "void* run(void* args)",
    logs_title: "std::vector<Log> logs",
    files_title: "#include <filesystem>",
    output_locked: "throw AccessDeniedException",
    security_warning: "SSL_Handshake_Failed",
    resource_usage: "malloc(1024)",
};

static ASM: ThemeContent = ThemeContent {
    system_name: "SECTION .DATA",
    status: "WAITING FOR INT 0x80",
    execute_label: "JMP _start",
    logs_title: "STACK POINTER (ESP)",
    files_title: "SEGMENT .TEXT",
    output_locked: "SEGMENTATION FAULT",
    security_warning: "RING 0 ACCESS GRANTED",
    resource_usage: "NOP NOP NOP",
};

static CHAOS: ThemeContent = ThemeContent {
    system_name: "H̵e̷l̵l̴o̷W̷o̸r̴l̶d̷",
    status: "E̶R̶R̷O̴R̵_̵4̴0̴4̵",
    execute_label: "D̴O̵ ̷N̵O̴T̵ ̷C̵L̵I̵C̷K̵",
    logs_title: "W̷h̷y̷ ̷a̷r̷e̷ ̷y̷o̷u̷ ̷h̷e̷r̷e̷?",
    files_title: "̷D̷a̷t̷a̷ ̷L̷o̷s̷t̷",
    output_locked: "̷N̷o̷ ̷E̷s̷c̷a̷p̷e̷",
    security_warning: "̷R̷U̷N̷",
    resource_usage: "̷∞̷%̷",
};
