//! Control-plane mutation against a live render loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use cadenza::prelude::*;

use crate::helpers::constant_buffer;

#[test]
fn adds_from_many_threads_all_land() {
    let mixer = Arc::new(Mixer::new());
    let threads = 8;
    let adds_per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let mixer = Arc::clone(&mixer);
            thread::spawn(move || {
                for _ in 0..adds_per_thread {
                    let player = SamplePlayer::new(constant_buffer(1, 8, 0.1));
                    mixer.add_source(Arc::new(player));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(mixer.len(), threads * adds_per_thread);
}

#[test]
fn render_loop_survives_concurrent_add_and_clear() {
    let mixer = Arc::new(Mixer::new());
    let stop = Arc::new(AtomicBool::new(false));

    let writer = {
        let mixer = Arc::clone(&mixer);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut i = 0u32;
            while !stop.load(Ordering::Relaxed) {
                let player = Arc::new(SamplePlayer::new(constant_buffer(1, 32, 0.01)));
                player.play();
                mixer.add_source(player);
                i += 1;
                if i % 16 == 0 {
                    mixer.clear_sources();
                }
            }
        })
    };

    // Render actor: every block must be a sum over one coherent snapshot,
    // so no sample can be NaN or wild regardless of interleaving.
    let mut out = AudioBuffer::new(2, 64);
    for _ in 0..500 {
        out.fill(0.0);
        mixer.process(&mut out);
        for &s in out.data() {
            assert!(s.is_finite());
            assert!((0.0..=1.0).contains(&s));
        }
    }

    stop.store(true, Ordering::Relaxed);
    writer.join().unwrap();
}

#[test]
fn trigger_while_rendering_is_safe() {
    let sampler = Arc::new(Sampler::new(constant_buffer(1, 4096, 0.1)));
    let mixer = Arc::new(Mixer::new());
    mixer.add_source(Arc::clone(&sampler) as Arc<dyn AudioSource>);

    let stop = Arc::new(AtomicBool::new(false));
    let trigger = {
        let sampler = Arc::clone(&sampler);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut note = 40;
            while !stop.load(Ordering::Relaxed) {
                sampler.note_on(note, 0.5);
                note = 40 + (note + 1) % 24;
            }
        })
    };

    let mut out = AudioBuffer::new(2, 128);
    for _ in 0..200 {
        out.fill(0.0);
        mixer.process(&mut out);
        for &s in out.data() {
            assert!(s.is_finite());
        }
    }

    stop.store(true, Ordering::Relaxed);
    trigger.join().unwrap();
}
