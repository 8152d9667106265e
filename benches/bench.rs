use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netmath::{int_to_literal, literal_to_int, mask_networks, Address, AddressFamily};

fn codec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codec");

    group.bench_function("IPv4 Parse", |b| {
        b.iter(|| {
            black_box(literal_to_int(black_box("192.0.2.190"), AddressFamily::Ipv4).unwrap());
        })
    });
    group.bench_function("IPv4 Render", |b| {
        b.iter(|| {
            black_box(int_to_literal(black_box(3221226174), AddressFamily::Ipv4));
        })
    });
    group.bench_function("IPv6 Parse", |b| {
        b.iter(|| {
            black_box(
                literal_to_int(black_box("2001:DB8:DEAD:BEEF::1"), AddressFamily::Ipv6).unwrap(),
            );
        })
    });
    group.bench_function("IPv6 Render", |b| {
        b.iter(|| {
            black_box(int_to_literal(
                black_box(42540766480198310862439499904952827905),
                AddressFamily::Ipv6,
            ));
        })
    });
    group.bench_function("IPv6 Embedded Parse", |b| {
        b.iter(|| {
            black_box(
                literal_to_int(black_box("::ffff:192.168.56.102"), AddressFamily::Ipv6).unwrap(),
            );
        })
    });

    group.finish();
}

fn network_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Network");
    let literals = [
        "192.0.2.190/28",
        "192.0.2.10",
        "[2001:DB8:DEAD:BEEF::1]/48",
        "2001:DB8:BAD:DAD::9/64",
        "192.0.2.250/29",
    ];

    group.bench_function("Address To Network", |b| {
        let address: Address = "2001:DB8:DEAD:BEEF::1/64".parse().unwrap();
        b.iter(|| {
            black_box(address.to_network(black_box(Some(48))).unwrap());
        })
    });
    group.bench_function("Mask Mixed List", |b| {
        b.iter(|| {
            black_box(mask_networks(black_box(&literals[..]), 24).unwrap());
        })
    });

    group.finish();
}

criterion_group!(benches, codec_benchmark, network_benchmark);
criterion_main!(benches);
