//! Canned farming questions and answers for the assistant.

use crate::i18n::Language;

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

const ENGLISH: [Faq; 10] = [
    Faq {
        question: "Best crop for my land",
        answer: "The best crop for your land depends on soil type, rainfall, temperature, and season. For areas with good rainfall and clay soil, rice is ideal. For dry regions with loamy soil, wheat and soybean are excellent choices.",
    },
    Faq {
        question: "Kharif crops",
        answer: "Kharif crops are grown during the monsoon season from June to October. Major Kharif crops include Rice, Maize, Cotton, Soybean, Bajra and Groundnut. These crops require warm weather and good rainfall.",
    },
    Faq {
        question: "Rabi crops",
        answer: "Rabi crops are cultivated in the winter season from October to March. Common Rabi crops include Wheat, Mustard, Gram (Chana), Peas and Barley. These crops grow best in cool temperatures and require less water.",
    },
    Faq {
        question: "Best soil type",
        answer: "Loamy soil is considered the most suitable soil for farming. It has a balanced mix of sand, silt and clay, which provides good drainage, aeration and nutrient availability for healthy crop growth.",
    },
    Faq {
        question: "Ideal rainfall",
        answer: "Most agricultural crops require rainfall between 500mm to 1200mm annually. Crops like Rice require heavy rainfall, whereas crops like Mustard and Gram grow well in low rainfall conditions.",
    },
    Faq {
        question: "Most profitable crop",
        answer: "Highly profitable crops in India include Cotton, Sugarcane, Soybean, Potato and Chilli. Profit depends on market demand, irrigation availability, fertilizer use and pest management.",
    },
    Faq {
        question: "Soil pH value",
        answer: "The ideal soil pH value for most crops ranges between 6.0 and 7.5. If soil becomes too acidic or alkaline, crop productivity reduces and nutrients become unavailable to plants.",
    },
    Faq {
        question: "Irrigation method",
        answer: "Drip irrigation is the most water-efficient method as it supplies water directly to plant roots. It reduces water wastage, improves crop yield and saves electricity and labor costs.",
    },
    Faq {
        question: "Which fertilizer to use",
        answer: "NPK fertilizer containing Nitrogen, Phosphorus and Potassium is widely used for balanced crop nutrition. Nitrogen promotes leaf growth, Phosphorus strengthens roots and Potassium improves crop resistance.",
    },
    Faq {
        question: "How to control pests",
        answer: "Pest control should be done using integrated pest management (IPM). Neem-based organic pesticides are safe for soil and human health. Chemical pesticides should be used only when infestation is severe.",
    },
];

const HINDI: [Faq; 10] = [
    Faq {
        question: "मेरी जमीन के लिए सबसे अच्छी फसल",
        answer: "आपकी जमीन के लिए सबसे अच्छी फसल मिट्टी, वर्षा, तापमान और मौसम पर निर्भर करती है। अच्छी वर्षा और चिकनी मिट्टी वाले क्षेत्रों में धान सबसे उपयुक्त है। कम वर्षा और दोमट मिट्टी में गेहूं और सोयाबीन अच्छी फसलें हैं।",
    },
    Faq {
        question: "खरीफ फसलें",
        answer: "खरीफ फसलें जून से अक्टूबर के बीच मानसून के मौसम में उगाई जाती हैं। प्रमुख खरीफ फसलें हैं: धान, मक्का, कपास, सोयाबीन, बाजरा और मूंगफली। इन फसलों को अधिक गर्मी और अच्छी बारिश की जरूरत होती है।",
    },
    Faq {
        question: "रबी फसलें",
        answer: "रबी फसलें अक्टूबर से मार्च के बीच सर्दियों में उगाई जाती हैं। प्रमुख रबी फसलें हैं: गेहूं, सरसों, चना, मटर और जौ। इन फसलों को ठंडा तापमान और कम पानी की आवश्यकता होती है।",
    },
    Faq {
        question: "सबसे अच्छी मिट्टी",
        answer: "दोमट मिट्टी खेती के लिए सबसे अच्छी मानी जाती है। इसमें रेत, चिकनी मिट्टी और गाद का संतुलन होता है, जिससे पानी का निकास अच्छा रहता है और फसलों को पोषक तत्व आसानी से मिलते हैं।",
    },
    Faq {
        question: "आदर्श वर्षा",
        answer: "अधिकतर फसलों के लिए 500mm से 1200mm तक की वर्षा उपयुक्त मानी जाती है। धान अधिक पानी में उगता है जबकि सरसों और चना कम वर्षा में अच्छी पैदावार देते हैं।",
    },
    Faq {
        question: "सबसे लाभदायक फसल",
        answer: "भारत में कपास, गन्ना, सोयाबीन, आलू और मिर्च सबसे अधिक लाभ देने वाली फसलें हैं। फसल का लाभ बाजार भाव, सिंचाई सुविधा और कीट नियंत्रण पर भी निर्भर करता है।",
    },
    Faq {
        question: "मिट्टी का pH",
        answer: "अधिकतर फसलों के लिए मिट्टी का सही pH मान 6.0 से 7.5 के बीच होना चाहिए। यदि pH ज्यादा बिगड़ जाए तो पौधों को पोषक तत्व नहीं मिलते और उत्पादन घट जाता है।",
    },
    Faq {
        question: "सिंचाई विधि",
        answer: "ड्रिप सिंचाई सबसे आधुनिक और पानी बचाने वाली विधि है। इससे पानी सीधे पौधों की जड़ों तक पहुंचता है, जिससे पानी की बचत होती है और उत्पादन बढ़ता है।",
    },
    Faq {
        question: "कौन सा उर्वरक उपयोग करें",
        answer: "NPK उर्वरक में नाइट्रोजन, फॉस्फोरस और पोटाश होते हैं। नाइट्रोजन पत्तियों की वृद्धि करता है, फॉस्फोरस जड़ों को मजबूत बनाता है और पोटाश फसल को बीमारी से बचाता है।",
    },
    Faq {
        question: "कीट नियंत्रण कैसे करें",
        answer: "कीट नियंत्रण के लिए नीम आधारित जैविक कीटनाशक सबसे सुरक्षित माने जाते हैं। अधिक संक्रमण होने पर ही रासायनिक दवाइयों का उपयोग करना चाहिए।",
    },
];

pub fn entries(lang: Language) -> &'static [Faq] {
    match lang {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
    }
}

pub fn instruction(lang: Language) -> &'static str {
    match lang {
        Language::English => "👇 Click on the questions below to get instant solutions.",
        Language::Hindi => "👇 तुरंत समाधान पाने के लिए नीचे दिए गए प्रश्नों पर क्लिक करें।",
    }
}

fn fallback(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Please select one of the farming questions shown above for accurate guidance."
        }
        Language::Hindi => {
            "सटीक जानकारी के लिए कृपया ऊपर दिए गए किसी भी खेती से जुड़े प्रश्न को चुनें।"
        }
    }
}

/// Answer for free text: the first question contained in the message
/// (ignoring case) wins.
pub fn reply(lang: Language, message: &str) -> &'static str {
    let message = message.to_lowercase();
    entries(lang)
        .iter()
        .find(|faq| message.contains(&faq.question.to_lowercase()))
        .map(|faq| faq.answer)
        .unwrap_or_else(|| fallback(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGS: [Language; 2] = [Language::English, Language::Hindi];

    #[test]
    fn every_question_answers_itself() {
        for lang in LANGS {
            for faq in entries(lang) {
                assert_eq!(reply(lang, faq.question), faq.answer, "{}", faq.question);
                let wrapped = format!("please tell me: {}?", faq.question.to_uppercase());
                assert_eq!(reply(lang, &wrapped), faq.answer, "{}", faq.question);
            }
        }
    }

    #[test]
    fn unmatched_text_gets_the_fallback() {
        assert_eq!(reply(Language::English, "hello"), fallback(Language::English));
        assert_eq!(reply(Language::Hindi, "नमस्ते"), fallback(Language::Hindi));
        // English questions are not searched in the Hindi table
        assert_eq!(reply(Language::Hindi, "Kharif crops"), fallback(Language::Hindi));
    }

    #[test]
    fn first_match_wins() {
        let both = "kharif crops or rabi crops?";
        assert_eq!(reply(Language::English, both), ENGLISH[1].answer);
    }
}
