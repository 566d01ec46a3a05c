//! Command tests against temporary files.

use std::fs;
use std::process::ExitCode;

use anyhow::Result;
use manifesto_audio::wav::read_header;
use manifesto_audio::PcmFormat;
use manifesto_cli::commands::{convert, generate, inspect, speak, validate};
use manifesto_cli::{SpeechAudio, SpeechGenerator, TextGenerator};
use manifesto_goal::GoalForm;
use pretty_assertions::assert_eq;

struct EchoText;

impl TextGenerator for EchoText {
    fn generate_text(&self, _prompt: &str) -> Result<String> {
        Ok("Tôi đã đạt mục tiêu.".to_string())
    }
}

struct ToneSpeech;

impl SpeechGenerator for ToneSpeech {
    fn generate_speech(&self, _text: &str) -> Result<SpeechAudio> {
        let pcm = (0..240i16)
            .map(|i| (i - 120) * 100)
            .flat_map(|s| s.to_le_bytes())
            .collect();
        Ok(SpeechAudio::speech(pcm))
    }
}

fn write_form(dir: &std::path::Path, form: &GoalForm) -> String {
    let path = dir.join("form.json");
    fs::write(&path, form.to_json_pretty().unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_validate_example_form() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_form(tmp.path(), &GoalForm::example());

    assert_eq!(validate::run(&path, false).unwrap(), ExitCode::SUCCESS);
    assert_eq!(validate::run(&path, true).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_validate_reports_invalid_form() {
    let tmp = tempfile::tempdir().unwrap();
    let form = GoalForm {
        dominant_sense: "Vị giác".to_string(),
        ..GoalForm::example()
    };
    let path = write_form(tmp.path(), &form);

    assert_eq!(validate::run(&path, false).unwrap(), ExitCode::from(1));
    assert_eq!(validate::run(&path, true).unwrap(), ExitCode::from(1));
}

#[test]
fn test_validate_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("missing.json");
    let path = path.to_string_lossy();

    assert!(validate::run(&path, false).is_err());
    // JSON mode reports the failure in its output instead
    assert_eq!(validate::run(&path, true).unwrap(), ExitCode::from(1));
}

#[test]
fn test_convert_then_inspect() {
    let tmp = tempfile::tempdir().unwrap();
    let pcm_path = tmp.path().join("speech.pcm");
    let wav_path = tmp.path().join("speech.wav");

    // Three stereo frames plus a stray byte
    let mut raw: Vec<u8> = [100i16, -100, 200, -200, 300, -300]
        .iter()
        .flat_map(|s| s.to_le_bytes())
        .collect();
    raw.push(0x7F);
    fs::write(&pcm_path, &raw).unwrap();

    let code = convert::run(
        &pcm_path.to_string_lossy(),
        &wav_path.to_string_lossy(),
        44100,
        2,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let wav = fs::read(&wav_path).unwrap();
    assert_eq!(wav.len(), 44 + 12);
    let header = read_header(&wav).unwrap();
    assert_eq!(header.channels, 2);
    assert_eq!(header.sample_rate, 44100);
    assert_eq!(header.frame_count(), 3);

    let wav_path = wav_path.to_string_lossy();
    assert_eq!(inspect::run(&wav_path, false).unwrap(), ExitCode::SUCCESS);
    assert_eq!(inspect::run(&wav_path, true).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_convert_rejects_zero_channels() {
    let tmp = tempfile::tempdir().unwrap();
    let pcm_path = tmp.path().join("speech.pcm");
    fs::write(&pcm_path, [0u8; 8]).unwrap();

    let err = convert::run(
        &pcm_path.to_string_lossy(),
        &tmp.path().join("out.wav").to_string_lossy(),
        24000,
        0,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("channel"));
}

#[test]
fn test_inspect_rejects_non_wav() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("notes.txt");
    fs::write(&path, "just some text, definitely not a RIFF file").unwrap();
    let path = path.to_string_lossy();

    assert!(inspect::run(&path, false).is_err());
    assert_eq!(inspect::run(&path, true).unwrap(), ExitCode::from(1));
}

#[test]
fn test_generate_writes_text_and_wav() {
    let tmp = tempfile::tempdir().unwrap();
    let form_path = write_form(tmp.path(), &GoalForm::example());
    let out_dir = tmp.path().join("out");
    let text_path = tmp.path().join("story.txt");
    let out_dir_arg = out_dir.to_string_lossy().into_owned();
    let text_path_arg = text_path.to_string_lossy().into_owned();

    let code = generate::run_with(
        &form_path,
        Some(out_dir_arg.as_str()),
        Some(text_path_arg.as_str()),
        &EchoText,
        Some(&ToneSpeech),
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    assert_eq!(fs::read_to_string(&text_path).unwrap(), "Tôi đã đạt mục tiêu.");

    let wav = fs::read(out_dir.join("Muc_Tieu_30_Ngay_Hồng Linh.wav")).unwrap();
    let header = read_header(&wav).unwrap();
    assert_eq!(header.sample_rate, 24000);
    assert_eq!(header.frame_count(), 240);
}

#[test]
fn test_generate_without_speech_writes_no_wav() {
    let tmp = tempfile::tempdir().unwrap();
    let form_path = write_form(tmp.path(), &GoalForm::example());
    let out_dir = tmp.path().join("out");
    let out_dir_arg = out_dir.to_string_lossy().into_owned();

    generate::run_with(
        &form_path,
        Some(out_dir_arg.as_str()),
        None,
        &EchoText,
        None,
    )
    .unwrap();
    assert!(!out_dir.exists());
}

#[test]
fn test_speak_writes_wav() {
    let tmp = tempfile::tempdir().unwrap();
    let text_path = tmp.path().join("story.txt");
    let wav_path = tmp.path().join("story.wav");
    fs::write(&text_path, "Tôi đã đạt mục tiêu.\n").unwrap();

    let code = speak::run_with(
        &text_path.to_string_lossy(),
        &wav_path.to_string_lossy(),
        &ToneSpeech,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let header = read_header(&fs::read(&wav_path).unwrap()).unwrap();
    assert_eq!(header.channels, PcmFormat::speech().channels);
    assert_eq!(header.data_len, 480);
}

#[test]
fn test_speak_rejects_empty_text() {
    let tmp = tempfile::tempdir().unwrap();
    let text_path = tmp.path().join("empty.txt");
    fs::write(&text_path, "\n  \n").unwrap();

    let err = speak::run_with(
        &text_path.to_string_lossy(),
        &tmp.path().join("out.wav").to_string_lossy(),
        &ToneSpeech,
    )
    .unwrap_err();
    assert!(err.to_string().contains("empty"));
}
