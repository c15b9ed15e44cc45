use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use stegoscribe_core::{ChannelCodec, Codec, CodecOptions, DctCodecOptions};

fn carrier_image() -> RgbImage {
    RgbImage::from_fn(512, 512, |x, y| {
        Rgb([(x % 200 + 20) as u8, (y % 200 + 20) as u8, ((x + y) % 200 + 20) as u8])
    })
}

pub fn image_encoding(c: &mut Criterion) {
    let plain_image = carrier_image();
    let secret_message = "Hello World!";

    c.bench_function("Image Encoding LSB", |b| {
        let codec = Codec::try_from(CodecOptions::Lsb).expect("Cannot create codec");
        b.iter(|| {
            codec
                .embed(&plain_image, secret_message)
                .expect("Cannot hide secret message")
        })
    });

    c.bench_function("Image Encoding DCT", |b| {
        let codec = Codec::try_from(CodecOptions::Dct(DctCodecOptions::default()))
            .expect("Cannot create codec");
        b.iter(|| {
            codec
                .embed(&plain_image, secret_message)
                .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
