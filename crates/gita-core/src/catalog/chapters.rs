//! Static chapter data.

use super::ChapterRecord;
use once_cell::sync::Lazy;

fn chapter(
    id: u8,
    sanskrit_name: &str,
    english_name: &str,
    transliteration: &str,
    summary: &str,
) -> ChapterRecord {
    ChapterRecord {
        id,
        sanskrit_name: sanskrit_name.to_string(),
        english_name: english_name.to_string(),
        transliteration: transliteration.to_string(),
        summary: summary.to_string(),
        external_url: format!("https://www.holy-bhagavad-gita.org/chapter/{id}"),
    }
}

/// The 18 chapters in canonical order.
pub static CHAPTERS: Lazy<Vec<ChapterRecord>> = Lazy::new(|| {
    vec![
        chapter(
            1,
            "Arjuna Vishada Yoga",
            "The Yoga of Arjuna's Dejection",
            "अर्जुनविषादयोग",
            "The first chapter sets the scene on the battlefield of Kurukshetra. Arjuna, a warrior prince, is overcome with doubt and sorrow about fighting his own relatives. He puts down his bow, refusing to fight, asking Krishna for guidance.",
        ),
        chapter(
            2,
            "Sankhya Yoga",
            "The Yoga of Knowledge",
            "सांख्ययोग",
            "Krishna begins his teachings by explaining the eternal nature of the soul (Atman) which never dies. He teaches Arjuna about duty (Dharma) and the importance of acting without attachment to the results.",
        ),
        chapter(
            3,
            "Karma Yoga",
            "The Yoga of Action",
            "कर्मयोग",
            "Krishna explains that no one can remain without action. He advises performing one's prescribed duties as a sacrifice to the Divine, without selfish motives, to purify the mind.",
        ),
        chapter(
            4,
            "Jnana Karma Sanyasa Yoga",
            "The Yoga of Knowledge and Renunciation of Action",
            "ज्ञानकर्मसंन्यासयोग",
            "Krishna reveals the history of this yoga and the secret of his own divine birth. He explains how spiritual knowledge burns all reactions of karma and leads to peace.",
        ),
        chapter(
            5,
            "Karma Sanyasa Yoga",
            "The Yoga of Renunciation",
            "कर्मसंन्यासयोग",
            "Krishna compares the path of renunciation with the path of selfless action, concluding that selfless service (Karma Yoga) is better for most because it is easier to practice.",
        ),
        chapter(
            6,
            "Dhyana Yoga",
            "The Yoga of Meditation",
            "ध्यानयोग",
            "This chapter describes the process of meditation to control the mind. Krishna explains how a disciplined mind is a friend, while an undisciplined mind is an enemy.",
        ),
        chapter(
            7,
            "Jnana Vijnana Yoga",
            "The Yoga of Knowledge and Wisdom",
            "ज्ञानविज्ञानयोग",
            "Krishna describes his absolute power over the universe. He explains that he is the source of everything and that the wise worship him with devotion.",
        ),
        chapter(
            8,
            "Akshara Brahma Yoga",
            "The Yoga of the Imperishable Brahman",
            "अक्षरब्रह्मयोग",
            "Krishna explains the moment of death and how the last thought determines the next journey of the soul. He teaches how to remember the Divine at the time of death.",
        ),
        chapter(
            9,
            "Raja Vidya Raja Guhya Yoga",
            "The Yoga of the King of Sciences and the King of Secrets",
            "राजविद्याराजगुह्ययोग",
            "Krishna reveals the most confidential knowledge of devotion. He promises that he personally takes care of those who constantly meditate on him.",
        ),
        chapter(
            10,
            "Vibhuti Yoga",
            "The Yoga of Divine Glories",
            "विभूतियोग",
            "Krishna describes his infinite opulences. He explains how he is the best among all beings and elements, helping Arjuna see God in the magnificence of the world.",
        ),
        chapter(
            11,
            "Vishwarupa Darshana Yoga",
            "The Yoga of the Vision of the Universal Form",
            "विश्वरूपदर्शनयोग",
            "On Arjuna's request, Krishna reveals his Cosmic Form (Vishvarupa), showing the entire universe within himself. Arjuna is filled with awe and reverence.",
        ),
        chapter(
            12,
            "Bhakti Yoga",
            "The Yoga of Devotion",
            "भक्तियोग",
            "Krishna explains the path of personal devotion. He lists the qualities of a true devotee who is dear to him, emphasizing peace, equality, and compassion.",
        ),
        chapter(
            13,
            "Kshetra Kshetrajna Vibhaga Yoga",
            "The Yoga of Distinction between the Field and the Knower of the Field",
            "क्षेत्र-क्षेत्रज्ञविभागयोग",
            "This chapter analyzes the difference between the physical body (the Field) and the soul (the Knower). It explores the nature of knowledge.",
        ),
        chapter(
            14,
            "Gunatraya Vibhaga Yoga",
            "The Yoga of the Division of the Three Gunas",
            "गुणत्रयविभागयोग",
            "Krishna explains the three modes of material nature: Goodness (Sattva), Passion (Rajas), and Ignorance (Tamas), and how they influence living beings.",
        ),
        chapter(
            15,
            "Purushottama Yoga",
            "The Yoga of the Supreme Divine Personality",
            "पुरुषोत्तमयोग",
            "Krishna describes the metaphorical tree of material existence. He explains the nature of the Supreme Person who transcends both the perishable world and the imperishable soul.",
        ),
        chapter(
            16,
            "Daivasura Sampad Vibhaga Yoga",
            "The Yoga of the Division between the Divine and Demoniacal Properties",
            "दैवासुरसंपद्विभागयोग",
            "Krishna distinguishes between divine qualities (truth, non-violence, humility) and demonic qualities (arrogance, anger, harshness), urging Arjuna to cultivate the divine.",
        ),
        chapter(
            17,
            "Shraddhatraya Vibhaga Yoga",
            "The Yoga of the Division of the Threefold Faith",
            "श्रद्धात्रयविभागयोग",
            "This chapter classifies faith, food, sacrifice, austerity, and charity into the three modes of nature (Goodness, Passion, Ignorance).",
        ),
        chapter(
            18,
            "Moksha Sanyasa Yoga",
            "The Yoga of Liberation and Renunciation",
            "मोक्षसंन्यासयोग",
            "The final chapter summarizes the teachings. Krishna explains the perfection of renunciation and surrendering all duties to him alone to attain liberation.",
        ),
    ]
});
