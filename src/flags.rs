use crate::labels::{FlagLabels, Labels};

/// One recognized peer-connection status code. Unknown codes never
/// construct a `PeerFlag`; they stay bare characters in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerFlag {
    Optimistic,
    Downloading,
    DownloadQueued,
    Uploading,
    UploadQueued,
    NotInterested,
    PeerUninterested,
    Encrypted,
    FromDht,
    FromPex,
    Incoming,
    Utp,
}

impl PeerFlag {
    pub const ALL: [PeerFlag; 12] = [
        Self::Optimistic,
        Self::Downloading,
        Self::DownloadQueued,
        Self::Uploading,
        Self::UploadQueued,
        Self::NotInterested,
        Self::PeerUninterested,
        Self::Encrypted,
        Self::FromDht,
        Self::FromPex,
        Self::Incoming,
        Self::Utp,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'O' => Some(Self::Optimistic),
            'D' => Some(Self::Downloading),
            'd' => Some(Self::DownloadQueued),
            'U' => Some(Self::Uploading),
            'u' => Some(Self::UploadQueued),
            'K' => Some(Self::NotInterested),
            '?' => Some(Self::PeerUninterested),
            'E' => Some(Self::Encrypted),
            'H' => Some(Self::FromDht),
            'X' => Some(Self::FromPex),
            'I' => Some(Self::Incoming),
            'T' => Some(Self::Utp),
            _   => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::Optimistic       => 'O',
            Self::Downloading      => 'D',
            Self::DownloadQueued   => 'd',
            Self::Uploading        => 'U',
            Self::UploadQueued     => 'u',
            Self::NotInterested    => 'K',
            Self::PeerUninterested => '?',
            Self::Encrypted        => 'E',
            Self::FromDht          => 'H',
            Self::FromPex          => 'X',
            Self::Incoming         => 'I',
            Self::Utp              => 'T',
        }
    }

    pub fn explanation<'a>(&self, labels: &'a FlagLabels) -> &'a str {
        match self {
            Self::Optimistic       => &labels.optimistic,
            Self::Downloading      => &labels.downloading,
            Self::DownloadQueued   => &labels.download_queued,
            Self::Uploading        => &labels.uploading,
            Self::UploadQueued     => &labels.upload_queued,
            Self::NotInterested    => &labels.not_interested,
            Self::PeerUninterested => &labels.peer_uninterested,
            Self::Encrypted        => &labels.encrypted,
            Self::FromDht          => &labels.from_dht,
            Self::FromPex          => &labels.from_pex,
            Self::Incoming         => &labels.incoming,
            Self::Utp              => &labels.utp,
        }
    }
}

/// A single decoded status character: the raw code plus the recognized
/// flag, when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagToken {
    pub code: char,
    pub flag: Option<PeerFlag>,
}

impl FlagToken {
    /// Hover text for the dashboard: "O: 宽容连接". None for unknown codes.
    pub fn tooltip(&self, labels: &Labels) -> Option<String> {
        self.flag
            .map(|f| format!("{}: {}", self.code, f.explanation(&labels.flags)))
    }
}

/// Decode a status string into ordered tokens. Unrecognized characters
/// pass through verbatim.
pub fn decode(flag_str: &str) -> Vec<FlagToken> {
    flag_str
        .chars()
        .map(|c| FlagToken { code: c, flag: PeerFlag::from_code(c) })
        .collect()
}

/// Render a status string for the dashboard: known codes become
/// tooltip-bearing spans, unknown codes stay bare glyphs. Input order is
/// preserved and tokens concatenate with no separator.
pub fn peer_status(flag_str: &str, labels: &Labels) -> String {
    let mut out = String::new();
    for token in decode(flag_str) {
        match token.tooltip(labels) {
            Some(tip) => {
                out.push_str(&format!("<span title=\"{}\">{}</span>", tip, token.code))
            }
            None => out.push(token.code),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_codes_in_order() {
        let tokens = decode("ODE");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].flag, Some(PeerFlag::Optimistic));
        assert_eq!(tokens[1].flag, Some(PeerFlag::Downloading));
        assert_eq!(tokens[2].flag, Some(PeerFlag::Encrypted));
    }

    #[test]
    fn test_decode_passes_unknown_codes_through() {
        let tokens = decode("OZ");
        assert_eq!(tokens[0].flag, Some(PeerFlag::Optimistic));
        assert_eq!(tokens[1].code, 'Z');
        assert_eq!(tokens[1].flag, None);
    }

    #[test]
    fn test_case_distinguishes_active_from_queued() {
        assert_eq!(PeerFlag::from_code('D'), Some(PeerFlag::Downloading));
        assert_eq!(PeerFlag::from_code('d'), Some(PeerFlag::DownloadQueued));
        assert_eq!(PeerFlag::from_code('U'), Some(PeerFlag::Uploading));
        assert_eq!(PeerFlag::from_code('u'), Some(PeerFlag::UploadQueued));
    }

    #[test]
    fn test_code_round_trips() {
        for flag in PeerFlag::ALL {
            assert_eq!(PeerFlag::from_code(flag.code()), Some(flag));
        }
    }

    #[test]
    fn test_peer_status_rendering() {
        let labels = Labels::default();
        assert_eq!(
            peer_status("OZ", &labels),
            "<span title=\"O: 宽容连接\">O</span>Z"
        );
        assert_eq!(peer_status("", &labels), "");
    }

    #[test]
    fn test_tooltip_text() {
        let labels = Labels::default();
        let tokens = decode("?");
        assert_eq!(
            tokens[0].tooltip(&labels),
            Some("?: 该用户无意从本机下载".to_string())
        );
    }
}
