//! 端到端集成测试：真实目录树上的语料解析 + 完整会话流程

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;
use word_dictation::{
    CheckOutcome, CorpusService, Difficulty, PuzzleState, SessionPhase, SessionState, WordScope,
    DEFAULT_BOOK,
};

/// 搭建一棵包含两种格式与多本词书的语料树
fn build_corpus() -> TempDir {
    let tmp = tempfile::tempdir().expect("创建临时目录失败");
    let root = tmp.path();

    // 根目录散装单元
    fs::write(root.join("sample.txt"), "test # 试验\nlonely\n   \n").expect("写入失败");

    // 词书 BookOne：传统 + 结构化两个单元
    fs::create_dir(root.join("BookOne")).expect("创建词书失败");
    fs::write(
        root.join("BookOne/Unit1.txt"),
        "apple # 苹果\ncomputer # 计算机；电脑\n",
    )
    .expect("写入失败");
    fs::write(
        root.join("BookOne/Unit2.json"),
        r#"{
  "meta": { "bookId": "BookOne", "unitId": "Unit2", "title": "Unit2", "version": "1.0" },
  "words": [
    { "word": "spelling", "definition": "拼写", "phonetic": "/ˈspelɪŋ/" },
    { "word": "challenge", "definition": "挑战" }
  ]
}"#,
    )
    .expect("写入失败");

    // 词书 BookTwo：一个损坏单元 + 一个正常单元
    fs::create_dir(root.join("BookTwo")).expect("创建词书失败");
    fs::write(root.join("BookTwo/Broken.json"), "{ 这不是合法的 JSON").expect("写入失败");
    fs::write(root.join("BookTwo/Unit1.txt"), "ocean # 海洋\n").expect("写入失败");

    // 不含可识别单元的目录，结构里应整体省略
    fs::create_dir(root.join("notes")).expect("创建目录失败");
    fs::write(root.join("notes/readme.md"), "不是单元").expect("写入失败");

    tmp
}

#[tokio::test]
async fn test_list_structure() {
    let tmp = build_corpus();
    let service = CorpusService::new(tmp.path());

    let structure = service.list_structure().await.expect("扫描结构失败");

    assert_eq!(
        structure.get(DEFAULT_BOOK),
        Some(&vec!["sample.txt".to_string()])
    );
    assert_eq!(
        structure.get("BookOne"),
        Some(&vec!["Unit1.txt".to_string(), "Unit2.json".to_string()])
    );
    assert_eq!(
        structure.get("BookTwo"),
        Some(&vec!["Broken.json".to_string(), "Unit1.txt".to_string()])
    );
    // 没有可识别单元的目录整体省略
    assert!(!structure.contains_key("notes"));
}

#[tokio::test]
async fn test_load_full_corpus_with_source_tags() {
    let tmp = build_corpus();
    let service = CorpusService::new(tmp.path());

    let words = service
        .load_words(&WordScope::all())
        .await
        .expect("加载词条失败");

    // sample 2 条 + Unit1 2 条 + Unit2 2 条 + Broken 0 条 + BookTwo/Unit1 1 条
    assert_eq!(words.len(), 7);

    let apple = words.iter().find(|w| w.word == "apple").expect("缺少 apple");
    assert_eq!(apple.source, "BookOne/Unit1.txt");
    let spelling = words
        .iter()
        .find(|w| w.word == "spelling")
        .expect("缺少 spelling");
    assert_eq!(spelling.source, "BookOne/Unit2.json");
    // 预留字段穿透整条加载链
    assert_eq!(spelling.phonetic, "/ˈspelɪŋ/");
    let lonely = words.iter().find(|w| w.word == "lonely").expect("缺少 lonely");
    assert_eq!(lonely.source, "sample.txt");
    assert_eq!(lonely.definition, "");
}

#[tokio::test]
async fn test_default_book_never_scans_subdirectories() {
    let tmp = build_corpus();
    let service = CorpusService::new(tmp.path());

    let words = service
        .load_words(&WordScope::for_book(DEFAULT_BOOK))
        .await
        .expect("加载词条失败");

    assert_eq!(words.len(), 2);
    assert!(words.iter().all(|w| w.source == "sample.txt"));
}

#[tokio::test]
async fn test_missing_book_yields_empty_not_error() {
    let tmp = build_corpus();
    let service = CorpusService::new(tmp.path());

    let words = service
        .load_words(&WordScope::for_book("Unit3"))
        .await
        .expect("缺失词书不应报错");
    assert!(words.is_empty());

    let words = service
        .load_words(&WordScope::for_unit("BookOne", "Missing.txt"))
        .await
        .expect("缺失单元不应报错");
    assert!(words.is_empty());
}

#[tokio::test]
async fn test_single_unit_scope_tags_source_verbatim() {
    let tmp = build_corpus();
    let service = CorpusService::new(tmp.path());

    let words = service
        .load_words(&WordScope::for_unit("BookOne", "Unit2.json"))
        .await
        .expect("加载词条失败");

    assert_eq!(words.len(), 2);
    // 指定到单元时，来源就是单元名本身
    assert!(words.iter().all(|w| w.source == "Unit2.json"));
}

#[tokio::test]
async fn test_broken_unit_is_isolated() {
    let tmp = build_corpus();
    let service = CorpusService::new(tmp.path());

    // 损坏的 Broken.json 被跳过，同词书的其他单元照常加载
    let words = service
        .load_words(&WordScope::for_book("BookTwo"))
        .await
        .expect("解析失败不应中断加载");

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "ocean");
}

#[tokio::test]
async fn test_three_word_drill_end_to_end() {
    let tmp = tempfile::tempdir().expect("创建临时目录失败");
    fs::write(tmp.path().join("drill.txt"), "cat # 猫\ndog # 狗\nsun # 太阳\n").expect("写入失败");

    let service = CorpusService::new(tmp.path());
    let words = service
        .load_words(&WordScope::all())
        .await
        .expect("加载词条失败");
    assert_eq!(words.len(), 3);

    let mut rng = StdRng::seed_from_u64(99);
    let mut session = SessionState::start(words, &mut rng);
    let mut generation = 0;

    // 三个单词依次拼对后会话结束
    while let Some(entry) = session.current().cloned() {
        generation += 1;
        let mut state = PuzzleState::begin(entry, Difficulty::Simple, &mut rng, generation);
        assert_eq!(state.hidden_count(), 1);

        let chars: Vec<char> = state.word().chars().collect();
        let pos = (0..state.len())
            .find(|&i| !state.is_revealed(i))
            .expect("simple 难度应有一个空格");
        let ticket = state
            .set_letter(pos, &chars[pos].to_string())
            .expect("填满最后一个空格应触发判题");
        assert_eq!(state.resolve_check(ticket), Some(CheckOutcome::Correct));

        session.advance();
    }

    assert_eq!(session.phase(), SessionPhase::Finished);
    assert!(session.passed_words().is_empty());
}

#[tokio::test]
async fn test_passed_words_feed_review_round() {
    let tmp = tempfile::tempdir().expect("创建临时目录失败");
    fs::write(tmp.path().join("drill.txt"), "cat # 猫\ndog # 狗\n").expect("写入失败");

    let service = CorpusService::new(tmp.path());
    let words = service
        .load_words(&WordScope::all())
        .await
        .expect("加载词条失败");

    let mut rng = StdRng::seed_from_u64(7);
    let mut session = SessionState::start(words, &mut rng);

    // 全部跳过后进入复习，复习队列正是跳过的单词
    session.pass();
    session.pass();
    assert_eq!(session.phase(), SessionPhase::Finished);
    assert_eq!(session.passed_words().len(), 2);

    assert!(session.start_review(&mut rng));
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.progress(), (1, 2));

    // 复习中再次跳过不会产生重复记录
    session.pass();
    session.pass();
    assert_eq!(session.passed_words().len(), 2);
}
