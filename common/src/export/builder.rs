//! 外部コラボレータのインターフェース
//!
//! エクスポートエンジンは特定の docx/zip ライブラリに依存せず、
//! ここで定義するトレイトだけを使う。

use crate::error::Result;
use crate::types::{ExportRecord, PhotoEntry};

// ============================================
// 文書ブロック
// ============================================

/// 書式付きテキスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: false }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<StyledRun>,
}

/// 表のセル（幅はページ幅に対する割合）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub width_percent: u8,
    pub runs: Vec<StyledRun>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// 列幅（パーセント）。行が無くても列構成はここから決まる
    pub column_widths: Vec<u8>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// 段落スタイル
///
/// 既存のエクスポート結果と互換を保つため値は固定。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font_size_pt: f32,
    pub space_after_pt: f32,
    pub line_height: f32,
}

impl ParagraphStyle {
    /// 本文: 11pt、段落後 12pt、行間 1.25
    pub const BODY: ParagraphStyle = ParagraphStyle {
        font_size_pt: 11.0,
        space_after_pt: 12.0,
        line_height: 1.25,
    };
}

// ============================================
// アーカイブ
// ============================================

/// アーカイブのメンバー（相対ファイル名 + 内容）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMember {
    pub name: String,
    pub content: Vec<u8>,
}

// ============================================
// トレイト
// ============================================

/// エクスポート対象レコードの供給元
///
/// エクスポート1回につき1度だけ呼ばれ、その時点のスナップショットを返す。
pub trait RecordSource {
    fn records(&self) -> Vec<ExportRecord>;
}

/// ブロック列から文書バイナリを生成する
pub trait DocumentBuilder {
    fn build_document(&self, blocks: &[Block]) -> Result<Vec<u8>>;
}

/// メンバー列からアーカイブバイナリを生成する（メンバー順は入力順）
pub trait ArchiveBuilder {
    fn build_archive(&self, members: &[ArchiveMember]) -> Result<Vec<u8>>;
}

/// 完成したペイロードの受け取り先（保存・ダウンロード）
pub trait DeliverySink {
    fn deliver(&mut self, outcome: super::ExportOutcome) -> Result<()>;
}

impl RecordSource for [ExportRecord] {
    fn records(&self) -> Vec<ExportRecord> {
        self.to_vec()
    }
}

impl RecordSource for Vec<ExportRecord> {
    fn records(&self) -> Vec<ExportRecord> {
        self.clone()
    }
}

impl RecordSource for [PhotoEntry] {
    fn records(&self) -> Vec<ExportRecord> {
        self.iter().map(PhotoEntry::to_record).collect()
    }
}

impl RecordSource for Vec<PhotoEntry> {
    fn records(&self) -> Vec<ExportRecord> {
        self.as_slice().records()
    }
}

/// 受け取ったペイロードをメモリに溜める Delivery Sink
#[derive(Debug, Default)]
pub struct MemorySink {
    pub delivered: Vec<super::ExportOutcome>,
}

impl DeliverySink for MemorySink {
    fn deliver(&mut self, outcome: super::ExportOutcome) -> Result<()> {
        self.delivered.push(outcome);
        Ok(())
    }
}
