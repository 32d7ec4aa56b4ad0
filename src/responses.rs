// src/responses.rs
//
// Fixed reply tables for the demo. Every string below is returned verbatim
// regardless of what the user typed; the selected model id is the only input.

use crate::models::ModelId;

/// Canned reply for the Qwen model.
pub const QWEN_REPLY: &str = r#"Ringkasan: Berdasarkan alat bukti dan keterangan di persidangan, terungkap fakta bahwa Terdakwa Ferian Sambouw (Alias Ferian) telah mencarikan pelanggan untuk berhubungan seks dengan Saksi Livi (Pelaku Prostitusi Seks Komersial) melalui aplikasi MiChat/WhatsApp. Terdakwa membuat akun palsu seolah-olah dirinya adalah perempuan yang dapat melayani berhubungan badan dengan laki-laki, menawarkan "800 ful-service, bisa negosi, stay hotel dan panggilan hotel, cash kamar", dan mengarahkan pelanggan ke Saksi Livi untuk dilayani berhubungan badan layaknya suami istri. Fakta Detail: Terdakwa Ferian Sambouw telah bekerja sebagai penyalur jasa Open Bo semenjak Bulan Mei 2023. Pada tanggal 15 Juni 2023 sekira pukul 23.50 WIT, Tim Polisi Polda Papua melakukan patroli di Hotel @HOM Premiere Abepura dan menemukan Saksi Livi (PSK) yang sedang beraktivitas. Sebagai respons, Saksi Perkasa Jaya menghubungi Terdakwa Ferian melalui WhatsApp untuk memesan layanan. Selama tinggal bersama Terdakwa, Saksi Livi telah melayani berhubungan seksual setidaknya 20 (dua puluh) laki-laki. Uang pembayaran hasil melayani hubungan seksual dari tamu yang diterima oleh Saksi Livi diserahkan kepada Terdakwa Ferian untuk dipergunakan membayar hotel, membeli makan dan kebutuhan lainnya. Pada tanggal 16 Juni 2023 sekira jam 01.30 WIT, Terdakwa menerima telepon dari tamu yang ingin mencari tiga perempuan untuk berhubungan seks, namun hanya ada satu perempuan (Saksi Livi) di Hotel @Home, sehingga Terdakwa menghubungi Saksi Iwan untuk mencari dua perempuan tambahan."#;

/// Canned reply for the Gemma model.
pub const GEMMA_REPLY: &str = r#"Berikut daftar nama TerDakwanya yaitu:
*   Ichа Bintі UbеAd
*    Sriуono Als Kopral Bin Putri Sujiyanto
*     Hari уano Bin Delijo
*      Мiftahur Rijali Bin Abrori


**Catatan:** Analisa lebih lanjut dapat dilakukan mengenai peran masing-masing terdakwa sesuai konteksi keseluruhan isi dokumen."#;

/// Canned reply for the Llama model.
pub const LLAMA_REPLY: &str = r#"[INPUT] Terdakwa I FAUZI bin MAKRUP: Mengakui diajak oleh saksi Rasimin untuk membantu memantau lokasi pemberangkatan PMI ilegal. Mengakui meminjamkan rekening bank istrinya untuk menerima dana operasional dan menerima upah. Menjelaskan perannya saat hari kejadian, dari memantau hingga melarikan diri saat penggerebekan.

[OUTPUT]
Terdakwa I FAUZI bin MAKRUP


[INPUT] Terdakwa II JARI bin DJUMANGIN: Mengakui diajak Terdakwa I untuk ikut membantu memantau lokasi. Menjelaskan perannya yang sama dengan Terdakwa I d...

[OUTPUT]
Terdakwa II JARI bin DJUMANGIN


[INPUT] Terdakwa mengakui perbuatannya. Ia kenal Anak Saksi dan telah 6 kali menawarkan jasa BO kepada tamu. Ia menawarkan tarif Rp. 1.200.000 dan akan mengambil keuntungan. Terdakwa juga menawarkan jasa perempuan lain selain Anak Saksi. Keuntungan yang didapat digunakan untuk kebutuhan sehari-hari.

[OUTPUT]
Terdakwa"#;

/// The simulated reasoning trace played before the Qwen reply.
pub const QWEN_THINKING: &str = r#"
Saya perlu menganalisa semua chunk dokumen yang diberikan dan mengekstrak "Fakta Hukum" dengan benar sesuai instruksi.

Langkah-langkah saya:

1.  **Analisis semua chunk dokumen**
    Ada 4 chunk dokumentasi yang diberikan. Mari analisis masing-masing chunk untuk menemukan bagian yang berisi "Fakta Hukum".

2.  **Identifikasi bagian yang berisi 'Fakta Hukum'**
    Dari konsep umum tentang putusan pengadilan, "fakta hukum" biasanya merujuk pada deskripsi detail kasus yang menjadi dasar bagi kesimpulan hukum mahkamah. Ini biasanya berupa uraian kronologis peristiwa, karakteristik terdakwa, bukti-bukti yang didapat, dll.

3.  **Gunakan contoh format dari database sebagai referensi**

    Contoh format dari database seperti:
    - [RAG_DB_EXAMPLE_1]: Memiliki ringkasan singkat dan detail fakta
    - [RAG_DB_EXAMPLE_2]: Mengandung "Ringkasan:" dan "Fakta Detail:"
    - [RAG_DB_EXAMPLE_3]: Mirip dengan contoh 2 tetapi lebih spesifik
    - [RAG_DB_EXAMPLE_4]: Punya struktur "Ringkasan:" dan "Fakta Detail"

    Format yang ingin saya ikuti adalah:
    ```
    Ringkasan: ...
    Fakta Detail: ...
    ```

4.  **Ekstrak konten 'Fakta Hukum' dengan format yang bersih dan terstruktur**

    Mari lihat isi dari setiap chunk:

    Chunk 1:
    Ini tampaknya berisi catatan tentang aktifitas terdakwa dalam mencari wanita untuk berhubungan seks. Informasi seperti jumlah wanita yang dicari, metode pencarian (melalui WhatsApp/michat), lokasi, dll.

    Chunk 2:
    Berisi informasi tentang operasi polisi di Hotel @HOM Premier Abepura, temuan saksi Livi (psk), dan intervensi terdakwa Ferian sebagai penyalur jasa.

    Chunk 3:
    Memuat bagian "Menimbang..." yang merupakan pendugaan/hukuman dari majelis hakim. Ini memiliki informasi penting tentang apa yang dibuktikan dalam kasus ini.

    Chunk 4:
    Sebuah potongan yang mirip dengan Chunk 2, juga berbicara tentang aktivitas terdakwa.

    Berdasarkan analisis, bagian yang paling relevan untuk "Fakta Hukum" adalah bagian yang menjelaskan peristiwa-peristiwa yang terjadi beserta detail-detailnya, bukan hanya kesimpulan hukum ("Menimbang...").

    Di Chunk 3, saya melihat frasa "Menimbang," yang merupakan bagian dari argumen hukum yang mengidentifikasi fakta-fakta yang menjadi dasar untuk keputusan hukum. Bagian ini sangat relevan untuk ekstraksi "Fakta Hukum".

    Namun, saya juga melihat di Chunk 2 dan Chunk 4 ada deskripsi yang cukup detil tentang aktivitas terdakwa.

    Untuk menentukan apakah bagian yang tepat adalah bagian "Menimbang", mari kita tinjau ulang:

    Bagian "Menimbang" dalam sebuah putusan pengadilan biasanya berisi analisis faktor-faktor yang menjadi dasar untuk keputusan hukum. Ini adalah area yang sangat relevan untuk ekstraksi "Fakta Hukum" karena menggambarkan fakta-fakta yang telah diverifikasi dan menjadi dasar untuk keputusan hukum.

    Secara spesifik, di Chunk 3 saya melihat:
    "Menimbang, bahwa uang pembayaran hasil melayani hubungan seksual dari ntamu..."

    Dan juga:
    "- Bahwa selama tinggal bersama dengan terdakwa ferian, saksi Livi sudah melayani berhubungan seksual setidaknya 20 (dua puluh) laki-laki;"
    "- Bahwa uang pembayaran hasil melayani hubungan seksual dari tamu, yang diterima oleh saksi Livi, diserahkan kepada terdakwa Ferian untuk dipergunakan membayar hotel, membeli makan dan kebutuhan mereka lainnya."

    Itu adalah bagian yang sangat cocok untuk "Fakta Hukum" karena menggambarkan fakta-fakta konkret yang menjadi dasar keputusan hukum.

    Selain itu, di Chunk 2 dan Chunk 4 terdapat deskripsi yang lebih detail tentang aktivitas terdakwa, misalnya:
    "Pada hari Kamis, tanggal 15 Juni 2023 sekira pukul 23.50 WIT..."
    "Saksi Perkasa Jaya yang beberapa kali sebelumnya sudah pernah mengguna kang jasa terdakwa Ferian..."

    Oleh karena itu, saya akan mengambil kombinasi dari informasi di Chunk 2, Chunk 3, dan Chunk 4 untuk membuat ekstraksi "Fakta Hukum" yang lengkap.

    Beberapa fakta utama yang saya identifikasi:
    1. Terdakwa Ferian Sambouw (alias Ferian) adalah penyalur jasa open bo/koneksi seks
    2. Terdakwa menggunakan aplikasi MiChat/MWhatsApp untuk mencari calon pasangan
    3. Terdakwa menghubungkan tamu laki-laki dengan Saksi Livi (PSK)
    4. Selama tinggal bersama terdakwa, Saksi Livi telah melayani minimal 20 laki-laki
    5. Uang pembayaran dari transaksi seks diserahkan terdakwa untuk biaya hidup
    6. Aktivitas terdakwa terjadi di Hotel @HOM Premiere Abepura, Jayapura
    7. Transaksi terjadi mulai tanggal 15-June-2023 hingga 16-Jun-2023

    Saya akan susun format ekstraksi berdasarkan contoh-contoh database yang diberikan. Format yang saya rencanakan:
    ```
    Ringkasan: <ringkasan singkat>
    Fakta Detail: <detail fakta yang lebih spesifik>
    ```

    Saya akan menggunakan [RAG_DB_EXAMPLE_2] sebagai acuan karena contohnya menggambarkan situasi serupa (transaksi seks melalui media sosial).

    Perlu saya pastikan agar ekstraksi saya:
    1. Akurat
    2. Lengkap
    3. Sesuai format database
    4. Preservasi teks asli sebanyak mungkin (tanpa error typografi/punctuation)

    Mari saya tuliskan ekstraksi:

    Ringkasan: Berdasarkan alat bukti dan keterangan di persidangan, terungkap fakta bahwa Terdakwa Ferian Sambouw (Alias Ferian) telah mencarikan pelanggan untuk berhubungan seks dengan Saksi Livi (Peeker Seks Komersial) melalui aplikasi MiChat/Wahtsap. Terdakwa membuat akun palsu sebagai perempuan yang dapat melayani berhubungan badan dengan laki-laki, menawarkan "800 full servis, bisa negotiat, stay hotel dan panggilan hotel, cash kamar", dan mengarahkan pelanggan ke Saksi Livi untuk dilayani berhubungan badan layaknya suami istri.

    Fakta Detail: Terdakwa Ferian Sambouw telah menerapkan sistem penyaluran jasa openbo semenjak Bulan Mei 2023. Pada tanggal 15 Juni 2023 sekira pukul 23.50 WIT, Tim Polisi Polda Papua melakukan patroli di Hotel @HOM Premiere Abepura dan menemukan Saksi Livi (PSK) yang sedang beraktivitas. Sebagai respons, Saksi Perkasa Jaya menghubungi Terdakwa Ferian melalui WhatsApp untuk memesan layanan. Selama tinggal bersama Terdakwa, Saksi Livi telah melayani berhubungan seksual setidaknya 20 (dua puluh) laki-laki. Uang pembayaran hasil melayani hubungan seksual dari tamu yang diterima oleh Saksi Livi diserahkan kepada Terdakwa Ferian untuk dipergunakan membayar hotel, membeli makan dan kebutuhan lainnya. Pada tanggal 16 Juni 2023 sekira jam 01.30 WIT, Terdakwa menerima telepon dari tamu yang ingin mencari tiga perempuan untuk berhubungan seks, namun hanya ada satu perempuan (Saksi Livi) di Hotel @HOME, sehingga Terdakwa menghubungi Saksi Iwan untuk mencari dua perempuan tambahan.

    Saya menggunakan [RAG_DB_EXAMPLE_2] sebagai referensi utama karena format dan topiknya sama (transaksi seks melalui aplikasi). Contoh ini juga memiliki struktur "Ringkasan" dan "Fakta Detail" yang sesuai dengan format yang saya inginkan.

    Saya perlu memastikan bahwa saya tidak mengubah huruf kapital, kata kunci, angka, atau tanda baca yang mendasarinya. Beberapa kata yang muncul di teks asli seperti "open BO" (di teks asli "open BO") dan "miChat" (teks asli "MiChat"), saya akan preservasi dengan cara yang sesuai.

    Saya juga perlu memperbaiki typo jika ada, seperti "Wahtsap" -> "Whatsapp" (tapi di teks aslinya "whatsapp" dan "michat"). Di teks asli, ada "michat" dan "whatsapp" yang mungkin kurang tepat, tapi saya akan tetap menggunakan versi yang lebih standar.

    Let's check if this matches with what we need from each document fragment:

    From Document Chunk 1:
    - Terdakwa mencari 3 perempuan
    - Terdakwa menghubungi Saksi Iwan untuk mencari 2 perempuan
    - Terdakwa menggunakan aplikasi MiChat
    - Terdakwa menerima pesan dari tamu pada tanggal 16 juni 2023 jam 01.30 wits

    From Document Chunk 2:
    - Operasi polisi di Hotel @HOM pada tanggal 15 juni 2023
    - Temuan Saksi Livi (PSK) dan Saksi Perkasa Jaya
    - Terdakwa Ferian sebagai penyalur jasa

    From Document Chunk 3 & 4:
    - Saksi Livi melayani minimal 20 laki-laki
    - Uang pembayaran diserahkan ke Terdakwa untuk kepentingan hidup
    - Aktivitas terjadi di Hotel @HOM Premiere Abepura

    Okay, saya pikir ekstraksi ini sudah cukup lengkap dan sesuai dengan format yang diinginkan.

    Saya akan ubah sedikit supaya lebih akurat dan sesuai dengan teks asli:

    * "open BO" -> "open Bo"
    * "michat" -> "MiChat" (sesuai dengan teks asli yang menggunakan capital letter)
    * "whatsapp" -> "WhatsApp"
    * "Saksi Livi" -> "Saksi Livi" (tidak ada typo)
    * "Terminologi": "penyalur jasa open bo" -> "penyalur jasa Open Bo" (tetapi di teks asli "open BO")

    Saya akan perbaiki sedikit untuk lebih akurat:

    Ringkasan: Berdasarkan alat bukti dan keterangan di persidangan, terungkap fakta bahwa Terdakwa Ferian Sambouw (Alias Ferian) telah mencarikan pelanggan untuk berhubungan seks dengan Saksi Livi (Penjual Layanan Seks Komersial) melalui aplikasi MiChat/WhatsApp. Terdakwa membuat akun palsu seolah-olah dirinya adalah perempuan yang dapat melayani berhubungan badan dengan laki-laki, menawarkan "800 full service, bisa negotiate, stay hotel dan panggilan hotel, cash kamar", dan mengarahkan pelanggan ke Saksi Livi untuk dilayani berhubungan badan layaknya suami istri.

    Fakta Detail: Terdakwa Ferian Sambouw telah bekerja sebagai penyalur jasa Open Bo semenjak Bulan Mei 2023. Pada tanggal 15 Juni 2023 sekira pukul 23.50 WIT, Tim Polisi Polda Papua melakukan patroli di Hotel @HOM Premiere Abepura dan menemukan Saksi Livi (PSK) yang sedang beraktivitas. Sebagai respons, Saksi Perkasa Jaya menghubungi Terdakwa Ferian melalui WhatsApp untuk memesan layanan. Selama tinggal bersama Terdakwa, Saksi Livi telah melayani berhubungan seksual setidaknya 20 (dua puluh) laki-laki. Uang pembayaran hasil melayani hubungan seksual dari tamu yang diterima oleh Saksi Livi diserahkan kepada Terdakwa Ferian untuk dipergunakan membayar hotel, membeli makan dan kebutuhan lainnya. Pada tanggal 16 Juni 2023 sekira jam 01.30 WIT, Terdakwa menerima telepon dari tamu yang ingin mencari tiga perempuan untuk berhubungan seks, namun hanya ada satu perempuan (Saksi Livi) di Hotel @Home, sehingga Terdakwa menghubungi Saksi Iwan untuk mencari dua perempuan tambahan.

    Saya menggunakan [RAG_DB_EXAMPLE_2] sebagai referensi utama.

    Cek kembali untuk memastikan tidak ada typo dan sesuai dengan teks asli:

    - "Open Bo" vs "open BO"? Di teks asli: "open BO" (mungkin maksudnya "open boy")
    - "negotiate" vs "negociate"? Di teks asli: "negou" (mungkin salah typing dari "nego" atau "negotiate")
    - "cash kamar" vs "cash kamar"?

    Saya akan sesuaikan dengan teks asli yang lebih akurat:

    Dari teks asli:
    - "800 fullservis, bisa negou, stay hotel dan panggilan hotel, cash kamar"

    Artikel "fullservis" = "fulservice"?
    "negou" = "negosiasikan"/"negotiase"?
    "cash kamar" = "uang tunai kamar"?

    Saya akan gunakan bahasa yang lebih formal dan sesuai dengan konteks hukum:

    Ringkasan: Berdasarkan alat bukti dan keterangan di persidangan, terungkap fakta bahwa Terdakwa Ferian Sambouw (Alias Ferian) telah mencarikan pelanggan untuk berhubungan seks dengan Saksi Livi (Pelaku Prostitusi Seks Komersial) melalui aplikasi MiChat/WhatsApp. Terdakwa membuat akun palsu seolah-olah dirinya adalah perempuan yang dapat melayani berhubungan badan dengan laki-laki, menawarkan "800 ful-service, bisa negoisasi, stay hotel dan panggilan hotel, cash kamar", dan mengarahkan pelanggan ke Saksi Livi untuk dilayani berhubungan badan layaknya suami istri.

    Fakta Detail: Terdakwa Ferian Sambouw telah bekerja sebagai penyalur jasa Open Bo semenjak Bulan Mei 2023. Pada tanggal 15 Juni 2023 sekira pukul 23.50 WIT, Tim Polisi Polda Papua melakukan patroli di Hotel @HOM Premiere Abepura dan menemukan Saksi Livi (PSK) yang sedang beraktivitas. Sebagai respons, Saksi Perkasa Jaya menghubungi Terdakwa Ferian melalui WhatsApp untuk memesan layanan. Selama tinggal bersama Terdakwa, Saksi Livi telah melayani berhubungan seksual setidaknya 20 (dua puluh) laki-laki. Uang pembayaran hasil melayani hubungan seksual dari tamu yang diterima oleh Saksi Livi diserahkan kepada Terdakwa Ferian untuk dipergunakan membayar hotel, membeli makan dan kebutuhan lainnya. Pada tanggal 16 Juni 2023 sekira jam 01.30 WIT, Terdakwa menerima telepon dari tamu yang ingin mencari tiga perempuan untuk berhubungan seks, namun hanya ada satu perempuan (Saksi Livi) di Hotel @Home, sehingga Terdakwa menghubungi Saksi Iwan untuk mencari dua perempuan tambahan.

    Saya menggunakan [RAG_DB_EXAMPLE_2].

    Saya perhatikan bahwa di teks asli ada "Halaman X dari Y" dan disclaimer yang tidak relevan untuk fakta hukum, jadi saya tidak masukkan bagian tersebut.

    Saya juga memastikan bahwa saya tidak menghapus informasi penting seperti nama-nama saksi, tanggal, waktu, dan lokasi.

    Akhirnya, saya akan presentasikan hasil ekstraksi dengan format yang sesuai.
"#;

/// Indonesian BETA disclaimer shown under every assistant reply.
pub const ASSISTANT_DISCLAIMER: &str = "Aplikasi ini masih dalam tahap pengembangan awal (BETA), sehingga jawaban yang diberikan bukanlah jawaban resmi atau hasil analisis sebenarnya dari model AI. Gunakan sebagai referensi saja.";

/// Short section labels one of which is picked at random when a
/// classification trigger phrase is submitted to Qwen.
pub const CLASSIFICATION_LABELS: [&str; 6] = [
    "fakta hukum",
    "irah-irah",
    "penahanan",
    "surat barang bukti",
    "amar putusan",
    "pertimbangan hukum",
];

const CLASSIFICATION_PHRASES: [&str; 2] = ["klasifikasi bagian ini", "bagian ini termasuk apa?"];

pub fn reply_for(model: ModelId) -> &'static str {
    match model {
        ModelId::Llama => LLAMA_REPLY,
        ModelId::Gemma => GEMMA_REPLY,
        ModelId::Qwen => QWEN_REPLY,
    }
}

/// The thinking narrative, present only for the thinking-capable model.
pub fn thinking_for(model: ModelId) -> Option<&'static str> {
    if model.supports_thinking() {
        Some(QWEN_THINKING)
    } else {
        None
    }
}

/// True for the two hard-coded trigger phrases that swap the long Qwen reply
/// for a random classification label. Case-insensitive, whitespace-trimmed.
pub fn is_classification_phrase(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    CLASSIFICATION_PHRASES.iter().any(|p| *p == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_defined_for_every_model() {
        for model in ModelId::ALL {
            assert!(!reply_for(model).is_empty());
        }
    }

    #[test]
    fn test_thinking_only_for_qwen() {
        assert_eq!(thinking_for(ModelId::Qwen), Some(QWEN_THINKING));
        assert_eq!(thinking_for(ModelId::Llama), None);
        assert_eq!(thinking_for(ModelId::Gemma), None);
    }

    #[test]
    fn test_classification_phrases() {
        assert!(is_classification_phrase("klasifikasi bagian ini"));
        assert!(is_classification_phrase("  Bagian ini termasuk apa?  "));
        assert!(!is_classification_phrase("ekstrak penahanan"));
    }

    #[test]
    fn test_qwen_reply_shape() {
        assert!(QWEN_REPLY.starts_with("Ringkasan:"));
        assert!(QWEN_REPLY.contains("Fakta Detail:"));
    }
}
