//! Built-in festival rules.
//!
//! Order is priority: specific rules sit above the broad ones they would
//! otherwise lose to, and the keyword hint is always last. Rules that embed
//! festival content use non-capturing groups only, so the content is sent
//! exactly as configured.

use crate::{FestivalContent, InputFeatures, RuleSpec, format_day, format_lineup};

const PAYMENT_METHODS: &str = "Metode pembayaran umum: kartu kredit/debit, transfer bank, dan e-wallet \
                               (gopay/ovo/dana/shopeepay). Periksa halaman checkout untuk daftar metode.";

fn rule_identity(content: &FestivalContent) -> RuleSpec {
    rule! {
        name: "identity",
        pattern: r"\b(?:who(?:\s*(?:are|r))?\s*(?:you|u|ur)|siapa\s+(?:kamu|anda|namamu)|nama\s*(?:kamu|anda|mu))\b",
        response: format!(
            "Saya adalah {} Bot — FestPal. Saya bantu informasi acara dan masalah tiket.",
            content.name
        ),
    }
}

fn rule_user_identity() -> RuleSpec {
    rule! {
        name: "user-identity",
        pattern: r"\bwho\s+am\s+i\b|\bsiapa\s+(?:aku|saya)\b",
        response: "Saya tidak punya akses ke data akunmu di sini. Untuk info akun, periksa profil aplikasi atau hubungi CS.",
    }
}

fn rule_greeting(content: &FestivalContent) -> RuleSpec {
    rule! {
        name: "greeting",
        pattern: r"\b(?:hi|hello|hey|hai|hallo|hei|halo|hola)\b",
        response: format!(
            "Halo! Saya {} — mau tanya soal tiket, jadwal, lokasi, atau bantuan CS?",
            content.name
        ),
    }
}

fn rule_help() -> RuleSpec {
    rule! {
        name: "help",
        pattern: r"\b(?:help|bantuan|menu|perintah|info|panduan|apa\s+yang\s+bisa\s+kamu(?:\s+lakuin|\s+lakukan)?)\b",
        response: "Saya bisa membantu:\n\
                   • Info tiket & harga (contoh: 'berapa harga tiket')\n\
                   • Cara beli & metode pembayaran (contoh: 'bisa gopay ga')\n\
                   • Refund / masalah tiket (contoh: 'i want refund' atau 'refund #ORDER123')\n\
                   • QR / e-ticket (contoh: 'QR tidak bisa discan')\n\
                   • Jadwal / lineup / siapa guest star (contoh: 'siapa guest star nya' atau 'lineup')\n\
                   • Parkir & transport (contoh: 'parkir mobil dimana?')\n\
                   • Contact CS (ketik 'contact')",
    }
}

fn rule_refund_order_code() -> RuleSpec {
    rule! {
        name: "refund-order-code",
        pattern: r"(?:refund|pengembalian).*(?:order|nomor|no\.?|kode|pesanan)\s*[:#]?\s*([A-Za-z0-9-]{3,})",
        response: "Permintaan refund tercatat untuk pesanan {0}. Silakan hubungi support resmi dan sertakan bukti \
                   pembayaran serta nomor pesanan tersebut.",
    }
}

fn rule_refund() -> RuleSpec {
    rule! {
        name: "refund",
        pattern: r"\b(?:refund|pengembalian uang|minta refund|pengembalian)\b",
        response: "Kebijakan refund tergantung jenis tiket. Biasanya refund hanya untuk pembatalan resmi oleh panitia. \
                   Sebutkan nomor pesananmu supaya saya bantu cek atau hubungi CS.",
    }
}

fn rule_resale() -> RuleSpec {
    rule! {
        name: "resale",
        pattern: r"\b(?:resale|re[- ]?sale|jual\s+ulang|transfer\s+tiket|transfer\s+ticket|jual\s+tiket)\b",
        response: "⚠️ Penjualan ulang / transfer tiket dari sumber tidak resmi berisiko. Tiket yang dibeli dari sumber \
                   tidak resmi dapat diblokir. Beli lewat kanal resmi untuk keamanan.",
    }
}

fn rule_ticket_not_received_id() -> RuleSpec {
    rule! {
        name: "ticket-not-received-id",
        pattern: r"(?:tidak|gak|ga|belum)\s*(?:mendapat|menerima|terima|terkirim).*(?:tiket|e-?ticket|eticket|email|invoice)",
        response: "Jika belum menerima e-ticket, periksa folder spam/promo di email. Jika tetap tidak ada, hubungi CS \
                   dengan bukti pembayaran (tanggal & nominal).",
    }
}

fn rule_ticket_not_received_en() -> RuleSpec {
    rule! {
        name: "ticket-not-received-en",
        pattern: r"(?:haven'?t|did not|not)\s+receive.*ticket|no.*ticket.*received",
        response: "If you haven't received your e-ticket, check spam and contact official support with proof of purchase.",
    }
}

fn rule_qr_problem() -> RuleSpec {
    rule! {
        name: "qr-problem",
        pattern: r"\b(?:qr|qr\s*code|scan|scan\s*qr|e-?ticket|eticket|barcode)\b.*(?:error|tidak|gak|ga|fail|cannot|can't|not\s+read|buram|blur)",
        response: "Jika QR e-ticket tidak terbaca, kunjungi loket box office atau Pos Informasi dengan bukti pembayaran \
                   untuk verifikasi manual.",
    }
}

fn rule_qr_info() -> RuleSpec {
    rule! {
        name: "qr-info",
        pattern: r"\b(?:qr|e-?ticket|eticket|barcode)\b",
        response: "E-ticket dikirim ke email yang terdaftar berupa QR code. Pastikan QR jelas & siap saat antrean.",
    }
}

fn rule_payment_ewallet() -> RuleSpec {
    rule! {
        name: "payment-ewallet",
        pattern: r"\b(?:bisa|boleh|accept|support|terima|menerima|can i|do you)\b.*\b(gopay|ovo|dana|shopeepay|shopee pay)\b",
        response: "Pembayaran via e-wallet (GoPay/OVO/DANA) dapat tersedia di payment gateway website resmi. \
                   Untuk konfirmasi, lanjutkan ke halaman checkout kanal pembelian yang kamu gunakan.",
    }
}

fn rule_payment_methods() -> RuleSpec {
    rule! {
        name: "payment-methods",
        pattern: r"\b(gopay|ovo|dana|shopeepay|bank transfer|bank|kartu kredit|credit card|debit)\b",
        response: PAYMENT_METHODS,
    }
}

fn rule_payment_generic() -> RuleSpec {
    rule! {
        name: "payment-generic",
        pattern: r"\b(metode|method|payment|pembayaran)\b",
        response: PAYMENT_METHODS,
    }
}

fn rule_ticket_price() -> RuleSpec {
    rule! {
        name: "ticket-price",
        pattern: r"\b(?:berapa\s+harga\s+tiket|harga\s+tiket|ticket\s+price|berapa\s+harga)\b",
        response: "Harga tiket:\n\
                   • Festival A (Standing): Rp350.000\n\
                   • Festival B (Standing): Rp250.000\n\
                   • VIP (Seating): Rp500.000\n\
                   Beli lewat website resmi atau partner resmi.",
    }
}

fn rule_ticket_categories() -> RuleSpec {
    rule! {
        name: "ticket-categories",
        pattern: r"\b(kategori|jenis)\s*tiket\b",
        response: "Kategori tiket: Festival A (Standing), Festival B (Standing), VIP (Seating).",
    }
}

fn rule_how_to_buy() -> RuleSpec {
    rule! {
        name: "how-to-buy",
        pattern: r"(?:cara|how to|how do i).*beli.*tiket|cara membeli tiket|how to purchase ticket",
        response: "Cara beli tiket:\n\
                   1) Kunjungi website resmi\n\
                   2) Pilih kategori & jumlah\n\
                   3) Isi data & pilih metode pembayaran\n\
                   4) Setelah bayar, cek email untuk e-ticket (QR).",
    }
}

fn rule_promo() -> RuleSpec {
    rule! {
        name: "promo",
        pattern: r"\b(voucher|promo|diskon|kode promo|kode diskon|coupon)\b",
        response: "Info promo/voucher:\n\
                   • Cek syarat & ketentuan di halaman promo resmi.\n\
                   • Masukkan kode promo pada halaman checkout.\n\
                   • Jika kode tidak berlaku, pastikan masih masa berlaku & cocok syarat.",
    }
}

fn rule_guest_star(content: &FestivalContent) -> RuleSpec {
    rule! {
        name: "guest-star",
        pattern: r"\b(?:siapa\s+guest\s*star(?:\s*nya)?|siapa\s+bintang\s*tamu(?:\s*nya)?)\b",
        response: format!(
            "Berikut lineup singkat:\n{}\n\nKetik 'lineup' atau 'siapa tampil hari ini' untuk detail hari tertentu.",
            format_lineup(&content.lineup)
        ),
    }
}

fn rule_lineup(content: &FestivalContent) -> RuleSpec {
    rule! {
        name: "lineup",
        pattern: r"\b(?:line[\s-]?up|lineup|daftar penampil|siapa yang tampil)\b",
        response: format!("Lineup acara:\n{}", format_lineup(&content.lineup)),
    }
}

fn rule_today_performers(content: &FestivalContent) -> RuleSpec {
    // Without a date in the question, "today" is the opening day.
    let response = match content.opening_day() {
        Some(day) => format!("Penampil hari ini ({}):\n{}", day.day, format_day(day)),
        None => "Belum ada jadwal penampil yang diumumkan.".to_string(),
    };

    rule! {
        name: "today-performers",
        pattern: r"\bsiapa\s+tampil\s+hari\s+ini\b",
        response: response,
    }
}

fn rule_clock_time() -> RuleSpec {
    rule! {
        name: "clock-time",
        pattern: r"(?:jam|pukul)\s+([0-2]?[0-9]:[0-5][0-9])\b",
        requires: InputFeatures::HAS_DIGITS | InputFeatures::HAS_COLON,
        response: "Jadwal jam {0}. Pastikan cek lineup untuk jam tampil artis terkait.",
    }
}

fn rule_parking(content: &FestivalContent) -> RuleSpec {
    let parking = &content.parking;
    rule! {
        name: "parking",
        pattern: r"\b(?:parkir|parking|parkir\s+mobil|parkir\s+motor|parkir\s+dimana|parkir\s+di\s+mana)\b",
        response: format!(
            "Info parkir:\n• Umum: {}\n• Motor: {}\n• VIP: {}\n• Tips: {}",
            parking.general, parking.motor, parking.vip, parking.tips
        ),
    }
}

fn rule_location(content: &FestivalContent) -> RuleSpec {
    rule! {
        name: "location",
        pattern: r"\b(?:lokasi|venue|alamat|dimana|di\s+mana|where)\b",
        response: format!("📍 Lokasi: {}. Cek peta & denah di website resmi.", content.location),
    }
}

fn rule_venue_rules() -> RuleSpec {
    rule! {
        name: "venue-rules",
        pattern: r"\b(aturan|peraturan|dilarang|larangan|rules|policy)\b",
        response: "Aturan singkat:\n\
                   • Bawa identitas & e-ticket (QR)\n\
                   • Dilarang membawa senjata, obat terlarang, kembang api, alkohol\n\
                   • Tidak dianjurkan membawa tripod/payung panjang",
    }
}

fn rule_contact(content: &FestivalContent) -> RuleSpec {
    rule! {
        name: "contact",
        pattern: r"\b(?:contact|kontak|customer\s*service|cs|support|hotline|hubungi)\b",
        response: format!("Hubungi Customer Service: {}\n", content.support_contact),
    }
}

fn rule_merch() -> RuleSpec {
    rule! {
        name: "merch",
        pattern: r"\b(merch|merchandise|kaos|t-shirt|booth|store)\b",
        response: "Merch resmi tersedia di booth merchandise di venue; pembayaran bisa tunai/non-tunai sesuai ketentuan booth.",
    }
}

fn rule_emergency() -> RuleSpec {
    rule! {
        name: "emergency",
        pattern: r"\b(darurat|medis|medical|paramedis|ambulans|dokter|emergency)\b",
        response: "Jika darurat medis, segera hubungi petugas terdekat atau pos medis di venue.",
    }
}

fn rule_lost_and_found() -> RuleSpec {
    rule! {
        name: "lost-and-found",
        pattern: r"\b(hilang|lost and found|lost|barang hilang)\b",
        response: "Laporkan barang hilang ke Pos Informasi / Lost & Found di venue; bawa bukti kepemilikan bila \
                   memungkinkan. Hubungi CS dengan bukti kehilangan.",
    }
}

fn rule_thanks() -> RuleSpec {
    rule! {
        name: "thanks",
        pattern: r"\b(terima\s?kasi?h?|thanks|thank you)\b",
        response: "Sama-sama! Ada lagi yang bisa saya bantu?",
    }
}

fn rule_goodbye() -> RuleSpec {
    rule! {
        name: "goodbye",
        pattern: r"\b(bye|goodbye|selamat\s+tinggal|sampai\s+jumpa|oke|baiklah)\b",
        response: "Sampai jumpa di festival! 🎶",
    }
}

fn rule_keyword_hint() -> RuleSpec {
    rule! {
        name: "keyword-hint",
        pattern: r"\b(tiket|harga|jadwal|lokasi|aturan|parkir|qr|refund|resale|merch|vip|lineup|help)\b",
        response: "Kamu bisa tanya: harga tiket, cara beli, refund, QR/e-ticket, jadwal/lineup, lokasi/parkir, \
                   atau ketik 'contact' untuk CS.",
    }
}

/// Default rule list for `content`, in dispatch order.
pub fn get(content: &FestivalContent) -> Vec<RuleSpec> {
    vec![
        rule_identity(content),
        rule_user_identity(),
        rule_greeting(content),
        rule_help(),
        rule_refund_order_code(),
        rule_refund(),
        rule_resale(),
        rule_ticket_not_received_id(),
        rule_ticket_not_received_en(),
        rule_qr_problem(),
        rule_qr_info(),
        rule_payment_ewallet(),
        rule_payment_methods(),
        rule_payment_generic(),
        rule_ticket_price(),
        rule_ticket_categories(),
        rule_how_to_buy(),
        rule_promo(),
        rule_guest_star(content),
        rule_lineup(content),
        rule_today_performers(content),
        rule_clock_time(),
        rule_parking(content),
        rule_location(content),
        rule_venue_rules(),
        rule_contact(content),
        rule_merch(),
        rule_emergency(),
        rule_lost_and_found(),
        rule_thanks(),
        rule_goodbye(),
        rule_keyword_hint(),
    ]
}
