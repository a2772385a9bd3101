use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use formforge::editor::{EditOp, FormState};
use formforge::generation::{LlmFormGenerator, TemplateGenerator};
use formforge::render::{export_html, export_json, preview, HtmlExporter};

const FENCED_REPLY: &str = r#"Here is your form:

```json
{
  "title": "Event Registration",
  "description": "Sign up for the annual meetup",
  "sections": [
    {
      "id": "attendee",
      "title": "Attendee",
      "fields": [
        { "id": "name", "type": "text", "label": "Full Name", "required": true },
        { "id": "email", "type": "email", "label": "Email", "required": true },
        { "id": "ticket", "type": "select", "label": "Ticket", "required": true,
          "options": ["Standard", "VIP", 3, null] }
      ]
    }
  ]
}
```

Let me know if you need changes."#;

fn benchmark_template_generation(c: &mut Criterion) {
    let generator = TemplateGenerator::new();

    c.bench_function("template_generate", |b| {
        b.iter(|| generator.generate(black_box("Build a job application form for engineers")))
    });
}

fn benchmark_parse_llm_reply(c: &mut Criterion) {
    c.bench_function("parse_fenced_reply", |b| {
        b.iter(|| LlmFormGenerator::parse_form(black_box(FENCED_REPLY)))
    });
}

fn benchmark_exports(c: &mut Criterion) {
    let form = TemplateGenerator::new().generate("job application");
    let exporter = HtmlExporter::new().unwrap();

    let mut group = c.benchmark_group("export");
    group.throughput(Throughput::Elements(1));

    group.bench_function("json", |b| b.iter(|| export_json(black_box(&form))));
    group.bench_function("html_shared_exporter", |b| {
        b.iter(|| exporter.render(black_box(&form)))
    });
    group.bench_function("html_fresh_exporter", |b| {
        b.iter(|| export_html(black_box(&form)))
    });
    group.bench_function("preview", |b| b.iter(|| preview(black_box(&form))));

    group.finish();
}

fn benchmark_edit_ops(c: &mut Criterion) {
    let form = TemplateGenerator::new().generate("feedback");

    c.bench_function("edit_add_then_remove_field", |b| {
        b.iter(|| {
            let added = EditOp::AddField { section: 0 }.apply(FormState::new(form.clone()));
            let removed = EditOp::RemoveField { section: 0, field: 0 }.apply(added.state);
            black_box(removed)
        })
    });
}

criterion_group!(
    benches,
    benchmark_template_generation,
    benchmark_parse_llm_reply,
    benchmark_exports,
    benchmark_edit_ops
);
criterion_main!(benches);
