//! Inline audio payloads returned by the speech model.

use anyhow::{Context, Result};
use base64::Engine;
use manifesto_audio::PcmFormat;

use super::types::InlineData;
use crate::generator::SpeechAudio;

/// Reads the PCM layout from a MIME type such as
/// `audio/L16;codec=pcm;rate=24000`.
///
/// Missing or unparsable `rate` and `channels` parameters fall back to the
/// 24 kHz mono speech layout.
pub fn pcm_format_from_mime(mime_type: &str) -> PcmFormat {
    let mut format = PcmFormat::speech();

    for param in mime_type.split(';').skip(1) {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "rate" => {
                if let Ok(rate) = value.parse::<u32>() {
                    if rate > 0 {
                        format.sample_rate = rate;
                    }
                }
            }
            "channels" => {
                if let Ok(channels) = value.parse::<u16>() {
                    if channels > 0 {
                        format.channels = channels;
                    }
                }
            }
            _ => {}
        }
    }

    format
}

/// Decodes a base64 inline audio part into raw PCM.
pub fn decode_inline_audio(inline: &InlineData) -> Result<SpeechAudio> {
    let pcm = base64::engine::general_purpose::STANDARD
        .decode(inline.data.trim())
        .context("Inline audio is not valid base64")?;

    Ok(SpeechAudio {
        pcm,
        format: pcm_format_from_mime(&inline.mime_type),
    })
}
