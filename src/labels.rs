use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Localized display strings injected into the formatters. Defaults are
/// compiled in; a labels.toml in the user config directory overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default)]
    pub time: TimeLabels,

    #[serde(default)]
    pub date: DateLabels,

    #[serde(default)]
    pub flags: FlagLabels,
}

/// Unit glyphs appended directly after each duration count, no space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLabels {
    pub day:    String,
    pub hour:   String,
    pub minute: String,
    pub second: String,
}

/// Date words and period glyphs for timestamp rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateLabels {
    pub today:     String,
    pub yesterday: String,
    pub tomorrow:  String,
    pub am:        String,
    pub pm:        String,
    /// Shown for an unknown (zero) timestamp.
    pub unavailable: String,
}

/// Explanations for the single-character peer status codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagLabels {
    pub optimistic:        String,
    pub downloading:       String,
    pub download_queued:   String,
    pub uploading:         String,
    pub upload_queued:     String,
    pub not_interested:    String,
    pub peer_uninterested: String,
    pub encrypted:         String,
    pub from_dht:          String,
    pub from_pex:          String,
    pub incoming:          String,
    pub utp:               String,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Labels {
    fn default() -> Self {
        Self {
            time:  TimeLabels::default(),
            date:  DateLabels::default(),
            flags: FlagLabels::default(),
        }
    }
}

impl Default for TimeLabels {
    fn default() -> Self {
        Self {
            day:    "天".into(),
            hour:   "时".into(),
            minute: "分".into(),
            second: "秒".into(),
        }
    }
}

impl Default for DateLabels {
    fn default() -> Self {
        Self {
            today:       "今日".into(),
            yesterday:   "昨日".into(),
            tomorrow:    "明日".into(),
            am:          "上午".into(),
            pm:          "下午".into(),
            unavailable: "N/A".into(),
        }
    }
}

impl Default for FlagLabels {
    fn default() -> Self {
        Self {
            optimistic:        "宽容连接".into(),
            downloading:       "正在从该用户下载".into(),
            download_queued:   "等待从该用户下载".into(),
            uploading:         "正在向该用户上传".into(),
            upload_queued:     "等待向该用户上传".into(),
            not_interested:    "本机无意从该用户下载".into(),
            peer_uninterested: "该用户无意从本机下载".into(),
            encrypted:         "连接已加密".into(),
            from_dht:          "通过分布式哈希表(DHT)发现".into(),
            from_pex:          "通过节点信息交换(PEX)发现".into(),
            incoming:          "已建立传入连接".into(),
            utp:               "通过uTP连接".into(),
        }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Labels {
    pub fn load() -> Self {
        match try_load() {
            Ok(l)  => l,
            Err(_) => {
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Labels::default()
            }
        }
    }

    pub fn labels_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("xferfmt").join("labels.toml"))
    }
}

fn try_load() -> Result<Labels> {
    let path = Labels::labels_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    let labels: Labels = toml::from_str(&text)?;
    Ok(labels)
}

fn try_write_defaults() -> Result<()> {
    let path = Labels::labels_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Labels::default())?;
    fs::write(path, format!("# xferfmt display labels\n# Generated on first run — edit freely\n\n{}", text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let labels: Labels = toml::from_str("").unwrap();
        assert_eq!(labels.time.day, "天");
        assert_eq!(labels.date.unavailable, "N/A");
        assert_eq!(labels.flags.utp, "通过uTP连接");
    }

    #[test]
    fn test_default_labels_round_trip() {
        let text = toml::to_string_pretty(&Labels::default()).unwrap();
        let parsed: Labels = toml::from_str(&text).unwrap();
        assert_eq!(parsed.date.today, "今日");
        assert_eq!(parsed.time.second, "秒");
        assert_eq!(parsed.flags.encrypted, "连接已加密");
    }

    #[test]
    fn test_full_section_overrides() {
        let text = r#"
            [date]
            today = "today"
            yesterday = "yesterday"
            tomorrow = "tomorrow"
            am = "AM"
            pm = "PM"
            unavailable = "n/a"
        "#;
        let labels: Labels = toml::from_str(text).unwrap();
        assert_eq!(labels.date.today, "today");
        assert_eq!(labels.date.pm, "PM");
        // untouched sections keep their defaults
        assert_eq!(labels.time.minute, "分");
    }
}
