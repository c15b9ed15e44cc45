use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use stegoscribe_core::{ChannelCodec, Codec, CodecOptions, DctCodecOptions, END_MARKER};

pub fn image_decoding(c: &mut Criterion) {
    let plain_image = RgbImage::from_fn(512, 512, |x, y| {
        Rgb([(x % 200 + 20) as u8, (y % 200 + 20) as u8, ((x + y) % 200 + 20) as u8])
    });

    for (name, options) in [
        ("Image Decoding LSB", CodecOptions::Lsb),
        (
            "Image Decoding DCT",
            CodecOptions::Dct(DctCodecOptions::default()),
        ),
    ] {
        let codec = Codec::try_from(options).expect("Cannot create codec");
        let secret_image = codec
            .embed(&plain_image, &format!("Hello World!{END_MARKER}"))
            .expect("Cannot hide secret message");

        c.bench_function(name, |b| {
            b.iter(|| {
                assert!(codec.extract(&secret_image).is_terminated());
            })
        });
    }
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
