use crate::Result;
use crate::text_to_speech::SynthesizedAudio;

/// Where the synthesized replies go (speaker, file, test buffer).
///
/// Implemented by the caller. The session owns its sink for its whole lifetime.
pub trait AudioSink: Send {
	fn play(&mut self, audio: &SynthesizedAudio) -> Result<()>;
}

impl<S: AudioSink + ?Sized> AudioSink for &mut S {
	fn play(&mut self, audio: &SynthesizedAudio) -> Result<()> {
		(**self).play(audio)
	}
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
	fn play(&mut self, audio: &SynthesizedAudio) -> Result<()> {
		(**self).play(audio)
	}
}

/// A sink keeping every clip in memory, in play order.
#[derive(Debug, Default)]
pub struct RecordingSink {
	clips: Vec<SynthesizedAudio>,
}

impl RecordingSink {
	pub fn clips(&self) -> &[SynthesizedAudio] {
		&self.clips
	}

	pub fn into_clips(self) -> Vec<SynthesizedAudio> {
		self.clips
	}
}

impl AudioSink for RecordingSink {
	fn play(&mut self, audio: &SynthesizedAudio) -> Result<()> {
		self.clips.push(audio.clone());
		Ok(())
	}
}
