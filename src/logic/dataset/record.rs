//! Sample Record - fixed-schema row of the validation dataset
//!
//! One typed field per NSL-KDD column plus the ground-truth `class`.
//! Categorical columns (`protocol_type`, `service`, `flag`) carry the
//! integer codes assigned at training time; the label-encoder artifact
//! maps them back to names for display.

use serde::{Deserialize, Serialize};

/// Feature columns in canonical NSL-KDD order. `class` is intentionally
/// absent: the ground truth is never part of the model input.
pub const FEATURE_COLUMNS: &[&str] = &[
    "duration",
    "protocol_type",
    "service",
    "flag",
    "src_bytes",
    "dst_bytes",
    "land",
    "wrong_fragment",
    "urgent",
    "hot",
    "num_failed_logins",
    "logged_in",
    "num_compromised",
    "root_shell",
    "su_attempted",
    "num_root",
    "num_file_creations",
    "num_shells",
    "num_access_files",
    "num_outbound_cmds",
    "is_host_login",
    "is_guest_login",
    "count",
    "srv_count",
    "serror_rate",
    "srv_serror_rate",
    "rerror_rate",
    "srv_rerror_rate",
    "same_srv_rate",
    "diff_srv_rate",
    "srv_diff_host_rate",
    "dst_host_count",
    "dst_host_srv_count",
    "dst_host_same_srv_rate",
    "dst_host_diff_srv_rate",
    "dst_host_same_src_port_rate",
    "dst_host_srv_diff_host_rate",
    "dst_host_serror_rate",
    "dst_host_srv_serror_rate",
    "dst_host_rerror_rate",
    "dst_host_srv_rerror_rate",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub duration: u64,
    pub protocol_type: u16,
    pub service: u16,
    pub flag: u16,
    pub src_bytes: u64,
    pub dst_bytes: u64,
    pub land: u8,
    pub wrong_fragment: u32,
    pub urgent: u32,
    pub hot: u32,
    pub num_failed_logins: u32,
    pub logged_in: u8,
    pub num_compromised: u32,
    pub root_shell: u8,
    pub su_attempted: u8,
    pub num_root: u32,
    pub num_file_creations: u32,
    pub num_shells: u32,
    pub num_access_files: u32,
    pub num_outbound_cmds: u32,
    pub is_host_login: u8,
    pub is_guest_login: u8,
    pub count: u32,
    pub srv_count: u32,
    pub serror_rate: f32,
    pub srv_serror_rate: f32,
    pub rerror_rate: f32,
    pub srv_rerror_rate: f32,
    pub same_srv_rate: f32,
    pub diff_srv_rate: f32,
    pub srv_diff_host_rate: f32,
    pub dst_host_count: u32,
    pub dst_host_srv_count: u32,
    pub dst_host_same_srv_rate: f32,
    pub dst_host_diff_srv_rate: f32,
    pub dst_host_same_src_port_rate: f32,
    pub dst_host_srv_diff_host_rate: f32,
    pub dst_host_serror_rate: f32,
    pub dst_host_srv_serror_rate: f32,
    pub dst_host_rerror_rate: f32,
    pub dst_host_srv_rerror_rate: f32,
    /// Ground-truth label: 0 = normal traffic, 1 = anomaly.
    pub class: u8,
}

impl SampleRecord {
    /// Look up a feature value by its training-time name, cast to the
    /// model's input type. Returns `None` for unknown names and for
    /// `class`.
    pub fn feature(&self, name: &str) -> Option<f32> {
        let value = match name {
            "duration" => self.duration as f32,
            "protocol_type" => self.protocol_type as f32,
            "service" => self.service as f32,
            "flag" => self.flag as f32,
            "src_bytes" => self.src_bytes as f32,
            "dst_bytes" => self.dst_bytes as f32,
            "land" => self.land as f32,
            "wrong_fragment" => self.wrong_fragment as f32,
            "urgent" => self.urgent as f32,
            "hot" => self.hot as f32,
            "num_failed_logins" => self.num_failed_logins as f32,
            "logged_in" => self.logged_in as f32,
            "num_compromised" => self.num_compromised as f32,
            "root_shell" => self.root_shell as f32,
            "su_attempted" => self.su_attempted as f32,
            "num_root" => self.num_root as f32,
            "num_file_creations" => self.num_file_creations as f32,
            "num_shells" => self.num_shells as f32,
            "num_access_files" => self.num_access_files as f32,
            "num_outbound_cmds" => self.num_outbound_cmds as f32,
            "is_host_login" => self.is_host_login as f32,
            "is_guest_login" => self.is_guest_login as f32,
            "count" => self.count as f32,
            "srv_count" => self.srv_count as f32,
            "serror_rate" => self.serror_rate,
            "srv_serror_rate" => self.srv_serror_rate,
            "rerror_rate" => self.rerror_rate,
            "srv_rerror_rate" => self.srv_rerror_rate,
            "same_srv_rate" => self.same_srv_rate,
            "diff_srv_rate" => self.diff_srv_rate,
            "srv_diff_host_rate" => self.srv_diff_host_rate,
            "dst_host_count" => self.dst_host_count as f32,
            "dst_host_srv_count" => self.dst_host_srv_count as f32,
            "dst_host_same_srv_rate" => self.dst_host_same_srv_rate,
            "dst_host_diff_srv_rate" => self.dst_host_diff_srv_rate,
            "dst_host_same_src_port_rate" => self.dst_host_same_src_port_rate,
            "dst_host_srv_diff_host_rate" => self.dst_host_srv_diff_host_rate,
            "dst_host_serror_rate" => self.dst_host_serror_rate,
            "dst_host_srv_serror_rate" => self.dst_host_srv_serror_rate,
            "dst_host_rerror_rate" => self.dst_host_rerror_rate,
            "dst_host_srv_rerror_rate" => self.dst_host_srv_rerror_rate,
            _ => return None,
        };
        Some(value)
    }

    /// Ground-truth mapping shown as "System Validation" in the scan
    /// report: 0 reads NORMAL, anything else reads ANOMALY.
    pub fn validation_label(&self) -> &'static str {
        if self.class == 0 {
            "NORMAL"
        } else {
            "ANOMALY"
        }
    }
}

/// A record with every field populated, for the schema and pipeline
/// tests. Values are a plausible benign HTTP connection.
#[cfg(test)]
pub fn fixture() -> SampleRecord {
    SampleRecord {
        duration: 0,
        protocol_type: 1,
        service: 20,
        flag: 9,
        src_bytes: 491,
        dst_bytes: 218,
        land: 0,
        wrong_fragment: 0,
        urgent: 0,
        hot: 0,
        num_failed_logins: 0,
        logged_in: 1,
        num_compromised: 0,
        root_shell: 0,
        su_attempted: 0,
        num_root: 0,
        num_file_creations: 0,
        num_shells: 0,
        num_access_files: 0,
        num_outbound_cmds: 0,
        is_host_login: 0,
        is_guest_login: 0,
        count: 2,
        srv_count: 2,
        serror_rate: 0.0,
        srv_serror_rate: 0.0,
        rerror_rate: 0.0,
        srv_rerror_rate: 0.0,
        same_srv_rate: 1.0,
        diff_srv_rate: 0.0,
        srv_diff_host_rate: 0.0,
        dst_host_count: 150,
        dst_host_srv_count: 25,
        dst_host_same_srv_rate: 0.17,
        dst_host_diff_srv_rate: 0.03,
        dst_host_same_src_port_rate: 0.17,
        dst_host_srv_diff_host_rate: 0.0,
        dst_host_serror_rate: 0.0,
        dst_host_srv_serror_rate: 0.0,
        dst_host_rerror_rate: 0.05,
        dst_host_srv_rerror_rate: 0.0,
        class: 0,
    }
}
