use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spellscan::{Alphabet, Checker, Format, Tokenizer, WordList};

const PROSE: &str = "The quick-brown fox jumps over the lazy dog, doesn't it? \
                     See https://example.org/fox for more about foxes.";

const LATEX: &str = r"The \emph{quick} fox \cite{knuth84} jumps over $x^2 + y$ the \textbf{lazy} dog % note";

const MAN: &str = r"The \fBquick\fR fox \(em jumps over the \fIlazy\fP dog \" note";

fn bench_tokenize(c: &mut Criterion) {
    let alphabet = Alphabet::letters();
    for (format, line) in [
        (Format::PlainText, PROSE),
        (Format::Latex, LATEX),
        (Format::Man, MAN),
    ] {
        let mut tokenizer = Tokenizer::new(format, &alphabet);
        c.bench_function(&format!("tokenize {format}"), |b| {
            b.iter(|| tokenizer.tokenize(black_box(line)))
        });
    }
}

fn bench_find(c: &mut Criterion) {
    let mut words = WordList::new(Alphabet::letters());
    words.add_words(["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"]);
    let document: Vec<&str> = std::iter::repeat(LATEX).take(100).collect();

    c.bench_function("find latex document", |b| {
        b.iter(|| {
            let mut checker = Checker::new(&words, Format::Latex);
            checker.find_lines(black_box(&document))
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_find);
criterion_main!(benches);
