//! The built-in curriculum deck

use crate::registry::{HeadingLevel, SlideContent, SlideRecord, Tone};

/// Slides of the generative-AI introductory curriculum, in presentation order
pub fn curriculum_slides() -> Vec<SlideRecord> {
    vec![
        SlideRecord::new(
            "生成AI活用入門",
            SlideContent::new()
                .centered_heading("情報系専門学校初学者向けカリキュラム", HeadingLevel::Primary)
                .centered_paragraph("2025年2月版", Tone::Muted),
        ),
        SlideRecord::new(
            "1. カリキュラム概要",
            SlideContent::new()
                .section("目的", "生成AIの基礎知識と実践スキルを習得")
                .heading("特徴", HeadingLevel::Secondary)
                .bullets([
                    "実践重視 (演習、失敗体験の共有)",
                    "能動的な学習を促進",
                    "対象: 情報系専門学校生",
                    "教育プロセス下地がないことを前提",
                ]),
        ),
        SlideRecord::new(
            "2. 教育目標",
            SlideContent::new().bullets([
                "AIの基本原理と仕組みを理解",
                "効果的なプロンプト作成と問題解決",
                "AIツールの実践的活用方法の習得",
                "AIを活用した開発プロセスの理解",
                "倫理的配慮とAIの限界の認識",
            ]),
        ),
        SlideRecord::new(
            "3. カリキュラム前期",
            SlideContent::new()
                .paragraph("AIとの対話と基礎概念", Tone::Lead)
                .cards([
                    ("Week 1-5: AIの基礎と対話", "プロンプト、問題解決、情報整理"),
                    ("Week 6-10: コード生成とGit", "テスト、リファクタリング、バージョン管理"),
                    ("Week 11-15: Web基礎とAIリテラシー", "アーキテクチャ、倫理、著作権"),
                ]),
        ),
        SlideRecord::new(
            "4. カリキュラム後期",
            SlideContent::new()
                .paragraph("実践的活用とプロジェクト体験", Tone::Lead)
                .cards([
                    ("Week 1-5: プロジェクト設計とAPI", "要件定義、データベース設計、API連携"),
                    ("Week 6-10: 実践開発", "Webアプリ開発、クラウドデプロイ"),
                    ("Week 11-15: 倫理と総まとめ", "情報モラル、最終発表、振り返り"),
                ]),
        ),
        SlideRecord::new(
            "5. 評価方法",
            SlideContent::new()
                .stats([
                    ("30%", "理解度テスト"),
                    ("40%", "実践課題"),
                    ("30%", "最終プロジェクト"),
                ])
                .muted_heading("評価ポイント", HeadingLevel::Secondary)
                .bullets([
                    "AIツールの適切な活用",
                    "問題解決アプローチ",
                    "チームワーク",
                    "プロジェクト完成度",
                    "ドキュメンテーション",
                ]),
        ),
    ]
}
