use article_blocks::{structure, structure_document, BlockKind, RawDocument, Rules};

const SAMPLE_ARTICLE: &str = "\
JAKARTA, KOMPAS.com - Pantai Sanur kembali ramai dikunjungi wisatawan.

KOMPAS.com/M LUKMAN PABRIYANTO Suasana Pantai Sanur pada pagi hari

Pantai ini terkenal dengan pasir putihnya yang halus dan ombak yang tenang.

Pesona Alam Tersembunyi

Di balik keramaian, ada sudut-sudut pantai yang masih sepi dan alami.
Air lautnya jernih sehingga cocok untuk snorkeling.

Kapan Waktu Terbaik?

Pagi hari adalah waktu terbaik untuk menikmati matahari terbit.
";

#[test]
fn structures_a_full_article_in_order() {
    let blocks = structure(SAMPLE_ARTICLE);

    // Credit line dropped; everything else survives in original order.
    assert_eq!(blocks.len(), 7);

    assert!(matches!(
        blocks[0].kind,
        BlockKind::LeadParagraph { .. }
    ));
    assert!(matches!(blocks[1].kind, BlockKind::Paragraph { .. }));
    assert!(matches!(blocks[2].kind, BlockKind::Heading { .. }));
    assert!(matches!(blocks[3].kind, BlockKind::Paragraph { .. }));
    assert!(matches!(blocks[4].kind, BlockKind::Paragraph { .. }));
    assert!(matches!(blocks[5].kind, BlockKind::Heading { .. }));
    assert!(matches!(blocks[6].kind, BlockKind::Paragraph { .. }));

    // Ordinals strictly increase even across the dropped credit line.
    let ordinals: Vec<usize> = blocks.iter().map(|block| block.ordinal).collect();
    let mut sorted = ordinals.clone();
    sorted.sort_unstable();
    assert_eq!(ordinals, sorted);
}

#[test]
fn lead_block_carries_emphasized_prefix() {
    let blocks = structure(SAMPLE_ARTICLE);
    let BlockKind::LeadParagraph {
        ref emphasized_prefix,
        ref remainder,
    } = blocks[0].kind
    else {
        panic!("expected lead paragraph, got {:?}", blocks[0].kind);
    };
    assert_eq!(emphasized_prefix, "JAKARTA, KOMPAS.com - ");
    assert_eq!(
        remainder,
        "Pantai Sanur kembali ramai dikunjungi wisatawan."
    );
}

#[test]
fn credit_line_never_reaches_output() {
    let blocks = structure(SAMPLE_ARTICLE);
    for block in &blocks {
        let text = match &block.kind {
            BlockKind::Heading { text } | BlockKind::Paragraph { text } => text.clone(),
            BlockKind::LeadParagraph {
                emphasized_prefix,
                remainder,
            } => format!("{emphasized_prefix}{remainder}"),
        };
        assert!(
            !text.contains("LUKMAN PABRIYANTO"),
            "credit leaked into output: {text}"
        );
    }
}

#[test]
fn splitting_is_idempotent_across_newline_runs() {
    let a = structure("A satu Dua\n\nB tiga Empat\n");
    let b = structure("A satu Dua\nB tiga Empat");
    let texts = |blocks: &[article_blocks::Block]| -> Vec<String> {
        blocks
            .iter()
            .map(|block| match &block.kind {
                BlockKind::Heading { text } | BlockKind::Paragraph { text } => text.clone(),
                BlockKind::LeadParagraph {
                    emphasized_prefix,
                    remainder,
                } => format!("{emphasized_prefix}{remainder}"),
            })
            .collect()
    };
    assert_eq!(texts(&a), texts(&b));
}

#[test]
fn empty_and_absent_content_yield_no_blocks() {
    assert!(structure("").is_empty());

    let doc = RawDocument {
        title: "Artikel".to_string(),
        url: "https://travel.kompas.com/read/2".to_string(),
        content: None,
        doc_len: None,
        image_url: None,
    };
    let article = structure_document(&doc, &Rules::default());
    assert!(article.blocks.is_empty());
}

#[test]
fn structure_document_passes_metadata_through_untouched() {
    let doc = RawDocument {
        title: "Pantai Sanur".to_string(),
        url: "https://travel.kompas.com/read/1".to_string(),
        content: Some(SAMPLE_ARTICLE.to_string()),
        doc_len: Some(450),
        image_url: Some("https://asset.kompas.com/sanur.jpg".to_string()),
    };

    let article = structure_document(&doc, &Rules::default());
    assert_eq!(article.title, doc.title);
    assert_eq!(article.url, doc.url);
    assert_eq!(article.doc_len, Some(450));
    assert_eq!(
        article.image_url.as_deref(),
        Some("https://asset.kompas.com/sanur.jpg")
    );
    assert_eq!(article.blocks.len(), 7);
}

#[test]
fn structures_a_document_from_backend_json() {
    let json = r#"{
        "title": "5 Pantai Terbaik di Bali",
        "url": "https://travel.kompas.com/read/3",
        "content": "DENPASAR, KOMPAS.com - Bali punya banyak pantai indah.\n\nPantai Pandawa\n\nPantai ini berada di balik tebing kapur.",
        "doc_len": 320,
        "image_url": "https://asset.kompas.com/pandawa.jpg"
    }"#;

    let doc: RawDocument = serde_json::from_str(json).expect("expected valid document JSON");
    let article = structure_document(&doc, &Rules::default());

    assert_eq!(article.blocks.len(), 3);
    assert!(matches!(
        article.blocks[0].kind,
        BlockKind::LeadParagraph { .. }
    ));
    assert!(matches!(article.blocks[1].kind, BlockKind::Heading { .. }));
    assert!(matches!(
        article.blocks[2].kind,
        BlockKind::Paragraph { .. }
    ));
}

#[test]
fn blocks_serialize_for_the_renderer() {
    let blocks = structure("Pesona Alam Tersembunyi");
    let json = serde_json::to_value(&blocks).expect("expected serializable blocks");
    assert_eq!(json[0]["kind"], "heading");
    assert_eq!(json[0]["text"], "Pesona Alam Tersembunyi");
}

#[test]
fn repeated_calls_are_deterministic() {
    let first = structure(SAMPLE_ARTICLE);
    let second = structure(SAMPLE_ARTICLE);
    assert_eq!(first, second);
}
