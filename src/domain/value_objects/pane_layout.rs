use std::fmt;

/// タブあたりの最大ペイン数
pub const MAX_PANES: usize = 4;

/// ペインの分割方向（iTerm2のsplitコマンドの語彙）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    Horizontally,
    Vertically,
}

impl fmt::Display for SplitDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitDirection::Horizontally => write!(f, "horizontally"),
            SplitDirection::Vertically => write!(f, "vertically"),
        }
    }
}

/// スクリプト内でセッションを参照する変数
///
/// 1番目のペインは`currentSession`、以降は`session2`..`session4`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneRef(usize);

impl PaneRef {
    pub const FIRST: PaneRef = PaneRef(1);

    /// 1始まりのペイン番号
    pub fn number(&self) -> usize {
        self.0
    }

    /// AppleScript上の変数名
    pub fn variable(&self) -> String {
        match self.number() {
            1 => "currentSession".to_string(),
            n => format!("session{n}"),
        }
    }
}

/// 新しいペインを作る1回の分割操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneSplit {
    /// 分割元のペイン
    pub source: PaneRef,
    pub direction: SplitDirection,
    /// 分割で作られるペイン
    pub created: PaneRef,
}

/// 2〜4番目のペインの作り方。
/// 2: 1を水平分割、3: 1を垂直分割、4: 2を垂直分割
const SPLITS: [PaneSplit; MAX_PANES - 1] = [
    PaneSplit {
        source: PaneRef(1),
        direction: SplitDirection::Horizontally,
        created: PaneRef(2),
    },
    PaneSplit {
        source: PaneRef(1),
        direction: SplitDirection::Vertically,
        created: PaneRef(3),
    },
    PaneSplit {
        source: PaneRef(2),
        direction: SplitDirection::Vertically,
        created: PaneRef(4),
    },
];

/// `pane_count`個のペインを得るための分割操作（先頭ペイン自体は含まない）
pub fn splits_for(pane_count: usize) -> &'static [PaneSplit] {
    let needed = pane_count.clamp(1, MAX_PANES) - 1;
    &SPLITS[..needed]
}
