//! End-to-end segmentation scenarios: dictionary loading, module chains,
//! named registration, and post-processing options working together.

use std::io::Write;
use std::sync::Arc;

use tempfile::TempDir;

use fenci::dictionary::{Dictionary, TABLE_DEFAULT, TABLE_WILDCARD};
use fenci::error::{FenciError, Result};
use fenci::module::{OptimizerModule, PluginModule, TokenizerModule, register_factory};
use fenci::segment::{Segment, SegmentOptions};
use fenci::token::{Token, join_words, pos};

/// Forward maximum matching over the default word table, built on the
/// length-bucketed index: at each position only candidates of lengths that
/// actually occur in the table are probed, longest first.
struct MaxMatchTokenizer {
    dict: Option<Arc<Dictionary>>,
}

impl MaxMatchTokenizer {
    fn new() -> Self {
        MaxMatchTokenizer { dict: None }
    }
}

impl TokenizerModule for MaxMatchTokenizer {
    fn name(&self) -> &'static str {
        "MaxMatchTokenizer"
    }

    fn init(&mut self, dict: Arc<Dictionary>) {
        self.dict = Some(dict);
    }

    fn split(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        let Some(table) = self.dict.as_ref().and_then(|d| d.table(TABLE_DEFAULT)) else {
            return Ok(tokens);
        };
        let max_len = (1..=8).rev().find(|&n| table.with_len(n).is_some());
        let Some(max_len) = max_len else {
            return Ok(tokens);
        };

        let mut out = Vec::new();
        for token in tokens {
            if token.pos.is_some() {
                out.push(token);
                continue;
            }
            let chars: Vec<char> = token.word.chars().collect();
            let mut i = 0;
            while i < chars.len() {
                let mut matched = false;
                for len in (1..=max_len.min(chars.len() - i)).rev() {
                    let Some(bucket) = table.with_len(len) else {
                        continue;
                    };
                    let candidate: String = chars[i..i + len].iter().collect();
                    if let Some(entry) = bucket.get(&candidate) {
                        out.push(Token::new(candidate).with_pos(entry.pos));
                        i += len;
                        matched = true;
                        break;
                    }
                }
                if !matched {
                    out.push(Token::new(chars[i]));
                    i += 1;
                }
            }
        }
        Ok(out)
    }
}

/// Tags common punctuation without splitting anything further.
struct PunctuationTagger;

impl TokenizerModule for PunctuationTagger {
    fn name(&self) -> &'static str {
        "PunctuationTagger"
    }

    fn split(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        let mut out = Vec::new();
        for token in tokens {
            if token.pos.is_some() {
                out.push(token);
                continue;
            }
            let mut run = String::new();
            for c in token.word.chars() {
                let is_punct = c.is_ascii_punctuation() || "，。！？；：、".contains(c);
                if is_punct {
                    if !run.is_empty() {
                        out.push(Token::new(std::mem::take(&mut run)));
                    }
                    out.push(Token::new(c).with_pos(pos::PUNCTUATION));
                } else {
                    run.push(c);
                }
            }
            if !run.is_empty() {
                out.push(Token::new(run));
            }
        }
        Ok(out)
    }
}

/// Merges adjacent single-character tokens that are still untagged, tagging
/// the merge as unknown. Exists to prove optimizers may merge.
struct UnknownRunOptimizer;

impl OptimizerModule for UnknownRunOptimizer {
    fn name(&self) -> &'static str {
        "UnknownRunOptimizer"
    }

    fn optimize(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        let mut out: Vec<Token> = Vec::new();
        for token in tokens {
            if token.pos.is_none() && out.last().is_some_and(|last| last.pos.is_none()) {
                out.last_mut().unwrap().word.push_str(&token.word);
            } else {
                out.push(token);
            }
        }
        Ok(out)
    }
}

fn write_file(dir: &TempDir, name: &str, content: &str) {
    let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
    file.write_all(content.as_bytes()).unwrap();
}

fn fixture_dir() -> TempDir {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        "dict.txt",
        "中文|1048576|100\n分词|1048576|80\n中文分词|1048576|90\n引擎|1048576|40\n的|8192|1000\n",
    );
    write_file(&dir, "wildcard.txt", "RUST|16|3\n");
    write_file(&dir, "synonym.txt", "斷詞,分词\n切词,分词\n");
    write_file(&dir, "stopword.txt", "的\n");
    dir
}

fn build_engine(dir: &TempDir) -> Result<Segment> {
    let mut segment = Segment::with_dict_dir(dir.path());
    segment
        .use_tokenizer(Box::new(PunctuationTagger))
        .use_tokenizer(Box::new(MaxMatchTokenizer::new()))
        .use_optimizer(Box::new(UnknownRunOptimizer))
        .load_dict("dict.txt")?
        .load_dict_as("wildcard.txt", TABLE_WILDCARD, true)?
        .load_synonym_dict("synonym.txt")?
        .load_stopword_dict("stopword.txt")?;
    Ok(segment)
}

#[test]
fn test_basic_segmentation() -> Result<()> {
    let dir = fixture_dir();
    let segment = build_engine(&dir)?;

    let tokens = segment.segment("中文分词的引擎", &SegmentOptions::default())?;
    let words: Vec<_> = tokens.iter().map(|t| t.word.as_str()).collect();

    // Maximum matching prefers the 4-character entry over 中文 + 分词.
    assert_eq!(words, ["中文分词", "的", "引擎"]);
    assert_eq!(tokens[0].pos, Some(1048576));
    Ok(())
}

#[test]
fn test_reconstruction_invariant_across_chain() -> Result<()> {
    let dir = fixture_dir();
    let segment = build_engine(&dir)?;

    for text in ["中文分词，真好。", "没词条的字", "abc中文def", "。。。"] {
        let tokens = segment.segment(text, &SegmentOptions::default())?;
        assert_eq!(join_words(&tokens), text, "reconstruction failed for {text:?}");
    }
    Ok(())
}

#[test]
fn test_sections_processed_independently() -> Result<()> {
    let dir = fixture_dir();
    let segment = build_engine(&dir)?;

    let tokens = segment.segment("中文分词 引擎\n引擎", &SegmentOptions::default())?;
    let words: Vec<_> = tokens.iter().map(|t| t.word.as_str()).collect();
    assert_eq!(words, ["中文分词", "引擎", "引擎"]);
    Ok(())
}

#[test]
fn test_full_option_stack() -> Result<()> {
    let dir = fixture_dir();
    let segment = build_engine(&dir)?;

    let options = SegmentOptions {
        strip_punctuation: true,
        convert_synonym: true,
        strip_stopword: true,
        ..SegmentOptions::default()
    };
    let words = segment.segment_simple("斷詞，的引擎。", &options)?;

    // Punctuation stripped, 斷詞 canonicalized to 分词, stopword 的 dropped.
    assert_eq!(words, ["分词", "引擎"]);
    Ok(())
}

#[test]
fn test_wildcard_table_is_lowercased() -> Result<()> {
    let dir = fixture_dir();
    let segment = build_engine(&dir)?;

    let table = segment.dict().table(TABLE_WILDCARD).unwrap();
    assert!(table.contains("rust"));
    assert!(!table.contains("RUST"));
    Ok(())
}

#[test]
fn test_length_index_consistency_after_load() -> Result<()> {
    let dir = fixture_dir();
    let segment = build_engine(&dir)?;

    let table = segment.dict().table(TABLE_DEFAULT).unwrap();
    for (word, entry) in table.iter() {
        let bucket = table
            .with_len(word.chars().count())
            .expect("missing length bucket");
        assert_eq!(bucket.get(word), Some(entry));
    }
    Ok(())
}

#[test]
fn test_register_modules_by_name() -> Result<()> {
    register_factory("ScenarioPunctuationTagger", || {
        PluginModule::Tokenizer(Box::new(PunctuationTagger))
    });
    register_factory("ScenarioMaxMatch", || {
        PluginModule::Tokenizer(Box::new(MaxMatchTokenizer::new()))
    });

    let dir = fixture_dir();
    let mut segment = Segment::with_dict_dir(dir.path());
    segment
        .use_by_name("ScenarioPunctuationTagger")?
        .use_by_name("ScenarioMaxMatch")?
        .load_dict("dict.txt")?;

    let tokens = segment.segment("中文分词", &SegmentOptions::default())?;
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].word, "中文分词");
    Ok(())
}

#[test]
fn test_register_unknown_name_fails() {
    let mut segment = Segment::new();
    let err = segment
        .use_by_name("NoSuchModuleAnywhere")
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, FenciError::ModuleNotFound { .. }));
}

#[test]
fn test_tokenizer_error_propagates() -> Result<()> {
    struct Failing;

    impl TokenizerModule for Failing {
        fn name(&self) -> &'static str {
            "Failing"
        }

        fn split(&self, _tokens: Vec<Token>) -> Result<Vec<Token>> {
            Err(FenciError::module("tokenizer exploded"))
        }
    }

    let dir = fixture_dir();
    let mut segment = build_engine(&dir)?;
    segment.use_tokenizer(Box::new(Failing));

    let err = segment
        .segment("中文", &SegmentOptions::default())
        .unwrap_err();
    assert!(matches!(err, FenciError::Module(_)));
    Ok(())
}

#[test]
fn test_engine_shared_across_threads() -> Result<()> {
    let dir = fixture_dir();
    let segment = Arc::new(build_engine(&dir)?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let segment = segment.clone();
            std::thread::spawn(move || {
                segment
                    .segment_simple("中文分词的引擎", &SegmentOptions::default())
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let words = handle.join().unwrap();
        assert_eq!(words, ["中文分词", "的", "引擎"]);
    }
    Ok(())
}
