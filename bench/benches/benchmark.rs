use ::std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use langram_classic::{Corpus, DetectorBuilder, Document, Estimator, Mode, ModelsStorage, NgramOrder};

const SENTENCES: &[(&str, &str)] = &[
    ("ar", "و في نفس الوقت أقول بأن الشيخ صالح لم يشر إلى مسؤولية الدولة التي تسمح لمواطنيها بملكية قنوات تبث ما تبث بل إنه حصر المسؤولية على ملاك هذه القنوات."),
    ("nl", "Aan de fysieke gesteldheid van de aspirant-beoefenaar worden geen bijzondere eisen gesteld anders dan een goede gezondheid."),
    ("en", "Here, in a region abundant with natural beauty, golfers will surely be rewarded with an exceptional golf experience."),
    ("fr", "Les affranchissements étaient très rares et s'ils accordaient la liberté à l'ancien esclave, ils ne lui conféraient pas le titre de citoyen."),
    ("de", "Natürlich war sie kein Pferd, dachte sie, aber warum wurde sie dann geritten, hatte einen Reiter zu tragen, war gesattelt, bekam Sporen und Lederpeitsche?"),
    ("hi", "अब इन्हें एक अलग प्लेट में निकाल कर गरमा-गरम आलू की सब्जी, हरे धनिये की चटनी या मीठी चटनी के साथ परोस कर खाइये और सबको खिलाइये।"),
    ("it", "Alla fine del secolo cambiarono nome, divenendo uno Capitano e l’altro Difensore, ma mantenendo le stesse caratteristiche degli anni precedenti."),
    ("pt", "Dizer que não estou, significaria explicar porquê e não me apetece nada desfiar o rosário das minhas lamentações."),
    ("ru", "То есть присяжные не сочли возможным осудить за соучастие в убийстве и убийство людей, доказательства вины которых не были предъявлены."),
    ("es", "Con frecuencia creo que Francia es malinterpretada, seala, aludiendo a la imagen que tiene el pas internacionalmente en materia de tica de trabajo."),
    ("sv", "Med dagens stadshusmajoritet är det övervikt för ett enplanstorg med bostäder, alltså för en ombyggnad i linje med alternativ maxi."),
    ("tr", "Mezuniyet hediyesi olarak yerleşkenin kuzey batı bölümüne dikilmiş vişnelerin meyvesini, tohumunu almışlardır."),
];

fn corpus() -> Corpus {
    SENTENCES
        .iter()
        .map(|&(label, text)| Document::new(label, text))
        .collect()
}

fn trigram_models() -> ModelsStorage {
    let order = NgramOrder::new(3).unwrap();
    ModelsStorage::train(&corpus(), order, Estimator::Mle)
}

fn benchmark_detector(c: &mut Criterion) {
    let models_storage = trigram_models();
    let mut group = c.benchmark_group("Detector all languages");

    for (name, mode) in [
        ("rank distance 300", Mode::rank_distance(300).unwrap()),
        ("perplexity", Mode::Perplexity),
    ] {
        let detector = DetectorBuilder::new(&models_storage).mode(mode).build();
        group.bench_function(name, |bencher| {
            bencher.iter(|| {
                SENTENCES.iter().for_each(|(_, sentence)| {
                    black_box(detector.detect(sentence));
                });
            });
        });
    }
    group.finish();
}

fn benchmark_train(c: &mut Criterion) {
    let corpus = corpus();
    let mut group = c.benchmark_group("Train");
    group.sample_size(10);

    for order in [1, 3, 5] {
        let order = NgramOrder::new(order).unwrap();
        group.bench_function(format!("order {order}"), |bencher| {
            bencher.iter(|| black_box(ModelsStorage::train(&corpus, order, Estimator::Mle)));
        });
    }
    group.finish();
}

fn benchmark_storage(c: &mut Criterion) {
    let models_storage = trigram_models();
    let bytes = models_storage.to_bytes().unwrap();
    let mut group = c.benchmark_group("Storage");
    group.sample_size(10);

    group.bench_function("write", |bencher| {
        bencher.iter(|| black_box(models_storage.to_bytes().unwrap()));
    });
    group.bench_function("read", |bencher| {
        bencher.iter(|| black_box(ModelsStorage::from_bytes(&bytes).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, benchmark_detector, benchmark_train, benchmark_storage);
criterion_main!(benches);
