//! Performance benchmarks for the matching and search hot paths
//!
//! Run with: cargo bench --bench matching_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use beetagged::matching::{DuplicateDetector, ProfileLinker};
use beetagged::models::{Contact, ContactBuilder};
use beetagged::search::{IntentParser, RelevanceRanker};
use beetagged::tags::generate_tags;

const COMPANIES: [&str; 5] = ["Stripe", "Google", "Globex", "Acme Corp", "Initech"];
const CITIES: [&str; 4] = ["Austin, TX", "Seattle, WA", "San Francisco, CA", "Portland, OR"];
const ROLES: [&str; 4] = [
    "Software Engineer",
    "Marketing Manager",
    "Product Designer",
    "Sales Lead",
];

/// Create a roster of plausible contacts for benchmarking.
///
/// Every tenth record reuses an earlier email so duplicate detection has
/// real groups to find.
fn create_bench_contacts(count: usize) -> Vec<Contact> {
    (0..count)
        .map(|i| {
            let mut builder = ContactBuilder::new(format!("Person {:04}", i))
                .company(COMPANIES[i % COMPANIES.len()])
                .position(ROLES[i % ROLES.len()])
                .location(CITIES[i % CITIES.len()])
                .email(format!("person{}@example.com", i / 10 * 10));
            if i % 3 == 0 {
                builder = builder.skill("python").interest("hiking");
            }
            builder.build()
        })
        .collect()
}

// =============================================================================
// Benchmark 1: Duplicate Detection
// =============================================================================

fn bench_duplicate_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicate_detection");

    // Pairwise comparison is O(n^2); sizes reflect realistic import batches.
    for count in [50, 100, 250, 500].iter() {
        group.bench_with_input(BenchmarkId::new("detect", count), count, |b, &count| {
            let contacts = create_bench_contacts(count);
            let detector = DuplicateDetector::new();

            b.iter(|| {
                let groups = detector.detect(&contacts);
                black_box(groups);
            });
        });
    }

    // Single pair comparison, the inner-loop unit of detection
    group.bench_function("is_duplicate_pair", |b| {
        let detector = DuplicateDetector::new();
        let a = ContactBuilder::new("Jane Doe").company("Acme").build();
        let other = ContactBuilder::new("Jane M. Doe").company("Acme").build();

        b.iter(|| {
            black_box(detector.is_duplicate(&a, &other));
        });
    });

    group.finish();
}

// =============================================================================
// Benchmark 2: Relevance Ranking
// =============================================================================

fn bench_relevance_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("relevance_ranking");

    let parser = IntentParser::new();

    for count in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("company_query", count), count, |b, &count| {
            let contacts = create_bench_contacts(count);
            let ranker = RelevanceRanker::new();
            let intent = parser.parse("who works at Google");

            b.iter(|| {
                let results = ranker.rank(&contacts, &intent);
                black_box(results);
            });
        });
    }

    // Different intent kinds walk different scoring paths.
    for (name, query) in [
        ("travel", "visiting Portland"),
        ("function_location", "engineers in Austin"),
        ("networking", "who should I connect with"),
        ("general", "Person 0042"),
    ]
    .iter()
    {
        group.bench_with_input(BenchmarkId::new("intent_kind", name), query, |b, query| {
            let contacts = create_bench_contacts(200);
            let ranker = RelevanceRanker::new();
            let intent = parser.parse(query);

            b.iter(|| {
                let results = ranker.rank(&contacts, &intent);
                black_box(results);
            });
        });
    }

    group.finish();
}

// =============================================================================
// Benchmark 3: Intent Parsing
// =============================================================================

fn bench_intent_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("intent_parsing");

    let parser = IntentParser::new();
    for (name, query) in [
        ("company", "who works at Google"),
        ("function_location", "marketing folks in austin"),
        ("travel", "visiting Portland next month"),
        ("modifiers", "developers near me who used to work at Stripe"),
        ("general", "some text that matches no table"),
    ]
    .iter()
    {
        group.bench_with_input(BenchmarkId::new("parse", name), query, |b, query| {
            b.iter(|| {
                let intent = parser.parse(query);
                black_box(intent);
            });
        });
    }

    group.finish();
}

// =============================================================================
// Benchmark 4: Tag Generation
// =============================================================================

fn bench_tag_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag_generation");

    group.bench_function("fully_populated_contact", |b| {
        let contact = ContactBuilder::new("Jane Doe")
            .company("Stripe")
            .position("Senior Software Engineer")
            .location("Austin, TX")
            .skill("python")
            .skill("sql")
            .build();

        b.iter(|| {
            let tags = generate_tags(&contact);
            black_box(tags);
        });
    });

    group.bench_function("sparse_contact", |b| {
        let contact = ContactBuilder::new("Jane Doe").build();

        b.iter(|| {
            let tags = generate_tags(&contact);
            black_box(tags);
        });
    });

    group.finish();
}

// =============================================================================
// Benchmark 5: Profile Linking
// =============================================================================

fn bench_profile_linking(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_linking");

    for count in [100, 500].iter() {
        group.bench_with_input(BenchmarkId::new("link_50_incoming", count), count, |b, &count| {
            let existing = create_bench_contacts(count);
            let incoming = create_bench_contacts(50);
            let linker = ProfileLinker::new();

            b.iter(|| {
                let links = linker.link(&incoming, &existing);
                black_box(links);
            });
        });
    }

    group.finish();
}

// =============================================================================
// Benchmark Group Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_duplicate_detection,
    bench_relevance_ranking,
    bench_intent_parsing,
    bench_tag_generation,
    bench_profile_linking,
);

criterion_main!(benches);
