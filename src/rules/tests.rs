use crate::rules::festival;
use crate::{Branch, FestivalContent, Responder, RuleTable};

fn bot() -> Responder {
    Responder::new().unwrap()
}

fn rule_for(bot: &Responder, input: &str) -> Option<String> {
    match bot.reply_verbose(input).details.branch {
        Branch::Matched { rule, .. } => Some(rule),
        _ => None,
    }
}

#[test]
fn default_rules_compile_in_order() {
    let content = FestivalContent::default();
    let table = RuleTable::new(festival::get(&content)).unwrap();
    let names: Vec<&str> = table.names().collect();

    assert_eq!(names.first(), Some(&"identity"));
    assert_eq!(names.last(), Some(&"keyword-hint"));

    let pos = |name: &str| names.iter().position(|n| *n == name).unwrap();
    assert!(pos("refund-order-code") < pos("refund"));
    assert!(pos("qr-problem") < pos("qr-info"));
    assert!(pos("payment-ewallet") < pos("payment-methods"));
    assert!(pos("guest-star") < pos("lineup"));
    assert!(pos("parking") < pos("location"));
}

#[test]
fn rule_names_are_unique() {
    let specs = festival::get(&FestivalContent::default());
    let mut names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), specs.len());
}

#[test]
fn inputs_route_to_expected_rules() {
    // Array of (expected_rule, input)
    let cases: Vec<(&str, &str)> = vec![
        ("identity", "siapa namamu?"),
        ("identity", "who are you"),
        ("identity", "siapa kamu"),
        ("identity", "siapa anda"),
        ("identity", "who r u"),
        ("identity", "who u"),
        ("identity", "nama kamu apa"),
        ("identity", "nama anda siapa"),
        ("user-identity", "who am i"),
        ("user-identity", "siapa aku"),
        ("user-identity", "siapa saya"),
        ("greeting", "halo"),
        ("greeting", "Hello"),
        ("greeting", "hola"),
        ("help", "help"),
        ("help", "bantuan"),
        ("help", "apa yang bisa kamu lakukan"),
        ("refund-order-code", "refund order #ORDER123"),
        ("refund-order-code", "pengembalian kode: AB-991"),
        ("refund", "refund"),
        ("refund", "minta refund"),
        ("refund", "pengembalian uang"),
        ("resale", "re-sale"),
        ("resale", "jual tiket"),
        ("ticket-not-received-id", "tidak terima tiket"),
        ("ticket-not-received-id", "belum menerima e-ticket"),
        ("ticket-not-received-en", "haven't received ticket"),
        ("ticket-not-received-en", "no ticket received"),
        ("qr-problem", "QR tidak bisa discan"),
        ("qr-problem", "e-ticket error"),
        ("qr-problem", "barcode blur"),
        ("qr-info", "ga dapat eticket"),
        ("qr-info", "qr"),
        ("payment-ewallet", "bisa gopay ga"),
        ("payment-ewallet", "terima OVO"),
        ("payment-methods", "credit card"),
        ("payment-generic", "payment method"),
        ("payment-generic", "metode pembayaran"),
        ("ticket-price", "berapa harga tiket"),
        ("ticket-price", "ticket price"),
        ("ticket-categories", "kategori tiket"),
        ("ticket-categories", "jenis tiket"),
        ("how-to-buy", "cara beli tiket"),
        ("how-to-buy", "how to purchase ticket"),
        ("promo", "kode promo"),
        ("promo", "coupon"),
        ("guest-star", "siapa guest star nya"),
        ("guest-star", "siapa bintang tamu"),
        ("lineup", "line-up"),
        ("lineup", "daftar penampil"),
        ("today-performers", "siapa tampil hari ini"),
        ("clock-time", "jam 19:30"),
        ("clock-time", "pukul 9:05 ada apa"),
        ("parking", "parkir mobil"),
        ("parking", "parking"),
        ("location", "dimana"),
        ("location", "where"),
        ("venue-rules", "dilarang"),
        ("venue-rules", "policy"),
        ("contact", "customer service"),
        ("contact", "cs"),
        ("merch", "t-shirt"),
        ("emergency", "ambulans"),
        ("lost-and-found", "barang hilang"),
        ("thanks", "terima kasih"),
        ("thanks", "thank you"),
        ("goodbye", "sampai jumpa"),
        ("goodbye", "bye"),
        ("keyword-hint", "tiket"),
        ("keyword-hint", "jadwal"),
        ("keyword-hint", "vip"),
    ];

    let bot = bot();
    for (expected, input) in cases {
        let got = rule_for(&bot, input);
        assert_eq!(got.as_deref(), Some(expected), "input {input:?}");
    }
}

#[test]
fn unknown_inputs_get_the_default_response() {
    let bot = bot();
    for input in ["qwertyuiop", "blablabla", "xyz123", "random nonsense text", "how do i buy"] {
        let out = bot.reply_verbose(input);
        assert_eq!(out.details.branch, Branch::Fallback, "input {input:?}");
        assert!(out.reply.to_lowercase().contains("maaf"), "input {input:?}");
    }
}

#[test]
fn replies_carry_the_expected_facts() {
    // Array of (fragments, input)
    let cases: Vec<(&[&str], &str)> = vec![
        (&["FestPal", "Bot"], "who are you"),
        (&["akses", "profil"], "siapa saya"),
        (&["FestPal", "mau tanya"], "hai"),
        (&["Rp350.000", "Rp250.000", "Rp500.000"], "harga tiket"),
        (&["Day 1:", "  • Tulus — 18:00", "Day 2:", "Ariana Grande — 21:30"], "lineup"),
        (&["Day 1", "Taylor Swift", "Ketik 'lineup'"], "siapa guest star"),
        (&["Penampil hari ini (Day 1):\n• Tulus — 18:00"], "siapa tampil hari ini"),
        (&["GOR UNY, Yogyakarta"], "venue"),
        (&["• Umum:", "• Motor:", "• VIP:", "• Tips:"], "parkir"),
        (&["support@festpal.com", "+62-812-3456-7890"], "hotline"),
        (&["website resmi", "Pilih kategori"], "cara membeli tiket"),
        (&["checkout"], "voucher"),
        (&["senjata", "alkohol"], "aturan"),
        (&["booth", "venue"], "merchandise"),
        (&["petugas"], "darurat"),
        (&["Pos Informasi", "bukti"], "lost and found"),
        (&["Sama-sama"], "thanks"),
        (&["Sampai jumpa di festival"], "goodbye"),
        (&["resmi"], "transfer ticket"),
        (&["loket box office"], "qr code fail"),
        (&["spam"], "tidak terima tiket"),
        (&["kartu kredit/debit"], "payment method"),
    ];

    let bot = bot();
    for (fragments, input) in cases {
        let out = bot.reply(input);
        for fragment in fragments {
            assert!(out.contains(fragment), "input {input:?}: {fragment:?} missing from {out:?}");
        }
    }
}

#[test]
fn captured_text_is_reflected_into_the_reply() {
    let bot = bot();

    let out = bot.reply("refund order ORDER123");
    assert!(out.contains("pesanan 123"), "{out}");
    assert!(out.contains("tercatat"));

    let out = bot.reply("refund order ABC456");
    assert!(out.contains("pesanan abc456"), "{out}");

    // Captures are lowercased and tokenized; ':' becomes its own token.
    let out = bot.reply("jam 19:30");
    assert_eq!(out, "Jadwal jam 19 : 30. Pastikan cek lineup untuk jam tampil artis terkait.");
}

#[test]
fn clock_rule_is_skipped_for_inputs_without_a_time() {
    let bot = bot();
    let out = bot.reply_verbose("jam berapa");
    assert_eq!(out.details.branch, Branch::Fallback);
    assert!(out.details.metrics.rules_skipped >= 1);
}

#[test]
fn content_flows_into_generated_rules() {
    let mut content = FestivalContent::default();
    content.name = "Jazz Night".to_string();
    content.location = "Taman Budaya".to_string();
    content.lineup.clear();

    let bot = Responder::builder().content(content).build().unwrap();
    assert!(bot.reply("halo").contains("Jazz Night"));
    assert!(bot.reply("lokasi").contains("Taman Budaya"));
    assert_eq!(bot.reply("siapa tampil hari ini"), "Belum ada jadwal penampil yang diumumkan.");
}

#[test]
fn content_with_braces_is_sent_as_is() {
    let mut content = FestivalContent::default();
    content.location = "Hall {0} / {B}".to_string();

    let bot = Responder::builder().content(content).build().unwrap();
    assert_eq!(bot.reply("lokasi"), "📍 Lokasi: Hall {0} / {B}. Cek peta & denah di website resmi.");
}
