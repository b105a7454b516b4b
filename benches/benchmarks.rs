// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use shipboard::{
    Column, PluginRegistry, TravisColumn, parse_projects, render_table,
};

fn benchmark_parse_projects(c: &mut Criterion) {
    let yaml = r"
projects:
  - name: website
    owner: acme
    repo: website
  - name: billing
    owner: acme
    repo: billing-service
    token: secret-token
  - name: api
    owner: acme
    repo: api-gateway
";

    c.bench_function("parse_projects_small", |b| {
        b.iter(|| parse_projects(black_box(yaml)).expect("parse failed"))
    });
}

fn benchmark_large_config_parse(c: &mut Criterion) {
    let mut yaml = String::from("projects:\n");
    for i in 0..100 {
        yaml.push_str(&format!(
            "  - name: project{i}\n    owner: acme\n    repo: repo{i}\n"
        ));
    }

    c.bench_function("parse_100_projects", |b| {
        b.iter(|| parse_projects(black_box(&yaml)).expect("parse failed"))
    });
}

fn benchmark_render_detail(c: &mut Criterion) {
    let public = TravisColumn {
        organization: "acme".to_owned(),
        project:      "website".to_owned(),
        token:        String::new(),
    };
    let private = TravisColumn {
        organization: "acme".to_owned(),
        project:      "billing-service".to_owned(),
        token:        "secret-token".to_owned(),
    };

    c.bench_function("render_detail_public", |b| {
        b.iter(|| black_box(&public).render_detail().expect("render failed"))
    });

    c.bench_function("render_detail_private", |b| {
        b.iter(|| black_box(&private).render_detail().expect("render failed"))
    });
}

fn benchmark_render_table(c: &mut Criterion) {
    let mut yaml = String::from("projects:\n");
    for i in 0..50 {
        yaml.push_str(&format!(
            "  - name: project{i}\n    owner: acme\n    repo: repo{i}\n"
        ));
    }
    let document = parse_projects(&yaml).expect("parse failed");
    let registry = PluginRegistry::with_defaults();

    c.bench_function("render_table_50_projects", |b| {
        b.iter(|| {
            render_table(black_box(&registry), black_box(&document.projects))
                .expect("render failed")
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_projects,
    benchmark_large_config_parse,
    benchmark_render_detail,
    benchmark_render_table
);
criterion_main!(benches);
