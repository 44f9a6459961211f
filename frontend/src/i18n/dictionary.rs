/// English phrase → Hindi phrase. Keys are the exact English strings the
/// components render.
pub(super) const HINDI: &[(&str, &str)] = &[
    // nav
    ("How It Works", "यह कैसे काम करता है"),
    ("Weather AI", "मौसम एआई"),
    ("Crops", "फसलें"),
    ("Sign In", "लॉग इन"),
    // hero
    ("Grow the Right Crop This Season", "इस मौसम सही फसल उगाएं"),
    (
        "AI-powered recommendations based on climate, soil & profitability.",
        "मौसम, मिट्टी और लाभ के आधार पर एआई सुझाव।",
    ),
    ("Get Started", "शुरू करें"),
    // timeline
    ("Select Month & Location", "महीना और स्थान चुनें"),
    ("AI Weather Understanding", "एआई मौसम विश्लेषण"),
    ("Recommended Crops", "अनुशंसित फसलें"),
    ("Profit & Growth", "लाभ और वृद्धि"),
    (
        "You enter your sowing month and region, Smart Kisan adapts to local climate.",
        "आप अपना बुवाई महीना और क्षेत्र दर्ज करते हैं, स्मार्ट किसान स्थानीय मौसम के अनुसार सुझाव देता है।",
    ),
    (
        "We analyze rainfall, soil moisture, humidity & temperature to avoid crop failure.",
        "हम वर्षा, मिट्टी की नमी, आर्द्रता और तापमान का विश्लेषण करके फसल नुकसान से बचाते हैं।",
    ),
    (
        "Get 3 ranked crops optimized for yield, climate & season.",
        "आपको उपज, मौसम और फसल के अनुसार 3 सर्वोत्तम फसलें मिलती हैं।",
    ),
    (
        "See estimated profit per acre, harvest time & risk factors.",
        "आप प्रति एकड़ अनुमानित लाभ, कटाई समय और जोखिम कारक देख सकते हैं।",
    ),
    // weather + survey
    ("Weather-Based Crop Advisory", "मौसम आधारित फसल सलाह"),
    (
        "Answer a few simple questions. Smart Kisan will predict the best crops.",
        "कुछ आसान सवालों के जवाब दें। स्मार्ट किसान आपको सही फसल बताएगा।",
    ),
    ("Where is your farm located?", "आपका खेत कहां स्थित है?"),
    ("State", "राज्य"),
    ("District", "जिला"),
    ("When will you sow?", "आप बुवाई कब करेंगे?"),
    ("Sowing Month", "बुवाई महीना"),
    ("Soil Information", "मिट्टी की जानकारी"),
    ("Soil Type", "मिट्टी का प्रकार"),
    ("Soil pH", "मिट्टी का pH"),
    ("Soil Nutrient Levels", "मिट्टी के पोषक तत्व"),
    ("Land Details", "भूमि विवरण"),
    ("Land Size (acres)", "भूमि का आकार (एकड़)"),
    // crops carousel
    ("Live Market Crops", "लाइव मंडी फसलें"),
    (
        "See real-time mandi prices & key growing conditions for major Indian crops.",
        "भारत की प्रमुख फसलों के रियल टाइम भाव देखें।",
    ),
    ("Duration:", "अवधि:"),
    ("Temp:", "तापमान:"),
    ("Rainfall:", "वर्षा:"),
    ("Soil:", "मिट्टी:"),
    ("Profit:", "लाभ:"),
    ("High", "उच्च"),
    ("Medium", "मध्यम"),
    ("Wheat", "गेहूं"),
    ("Rice (Paddy)", "धान"),
    ("Maize", "मक्का"),
    ("Soybean", "सोयाबीन"),
    ("Cotton", "कपास"),
    ("Groundnut", "मूंगफली"),
    ("Mustard", "सरसों"),
    ("Potato", "आलू"),
    ("Sugarcane", "गन्ना"),
    ("Chana", "चना"),
    // footer
    ("Quick Links", "त्वरित लिंक"),
    ("Home", "होम"),
    ("Contact", "संपर्क"),
    (
        "Smart agriculture insights, weather, and crop advisory.",
        "स्मार्ट खेती, मौसम और फसल सलाह।",
    ),
    // result card
    ("✅ AI Crop Recommendations", "✅ एआई फसल सिफारिश"),
    ("📍 Location:", "📍 स्थान:"),
    ("🌱 Season Detected:", "🌱 पहचाना गया मौसम:"),
    ("🌦️ Climate Used:", "🌦️ उपयोग किया गया मौसम:"),
    ("✅ Best for season", "✅ मौसम के लिए सर्वोत्तम"),
    ("⚠️ Off-season", "⚠️ ऑफ-सीजन"),
    ("Total Profit", "कुल लाभ"),
    ("Net Profit", "शुद्ध लाभ"),
    ("Revenue", "कुल आय"),
    ("Cost", "कुल लागत"),
    ("per acre", "प्रति एकड़"),
    ("/ qtl", "/ क्विंटल"),
    // error card
    ("Uh, oh something went wrong", "उफ! कुछ गलत हो गया"),
    ("Server not responding", "सर्वर से संपर्क नहीं हो पा रहा"),
    ("Prediction failed", "भविष्यवाणी विफल रही"),
    ("Invalid district/state", "अमान्य जिला या राज्य"),
    (
        "Sowing month is too far for accurate 90-day prediction.",
        "बुवाई का महीना बहुत दूर है, 90 दिन की सही भविष्यवाणी संभव नहीं है।",
    ),
    // popups
    ("Enter your name", "अपना नाम दर्ज करें"),
    ("Enter a valid email", "मान्य ईमेल दर्ज करें"),
    (
        "Password must be at least 6 characters",
        "पासवर्ड कम से कम 6 अक्षरों का होना चाहिए",
    ),
    ("Could not send OTP. Try again.", "ओटीपी भेजने में असफल। पुनः प्रयास करें।"),
    ("OTP expired! Please try again.", "ओटीपी समाप्त हो गया। पुनः प्रयास करें।"),
    ("Invalid OTP. Try again.", "गलत ओटीपी। पुनः प्रयास करें।"),
    ("Network error. Please try again.", "नेटवर्क त्रुटि। कृपया पुनः प्रयास करें।"),
    ("Account created successfully! 🎉", "खाता सफलतापूर्वक बन गया! 🎉"),
    ("Incorrect password.", "गलत पासवर्ड।"),
    ("User not found. Please sign up.", "उपयोगकर्ता नहीं मिला। कृपया साइन अप करें।"),
    ("Please enter email and password", "कृपया ईमेल और पासवर्ड दर्ज करें"),
    ("Please enter your email", "कृपया अपना ईमेल दर्ज करें"),
    ("Please enter your password", "कृपया अपना पासवर्ड दर्ज करें"),
    ("Account already exists. Please sign in.", "खाता पहले से मौजूद है। कृपया लॉग इन करें।"),
    ("Please enter 6-digit OTP", "कृपया 6 अंकों का ओटीपी दर्ज करें"),
    ("OTP sent! Check your email.", "ओटीपी भेज दिया गया! अपना ईमेल देखें।"),
    ("Failed to send. Try again.", "भेजने में असफल। पुनः प्रयास करें।"),
    ("Network error. Try again.", "नेटवर्क त्रुटि। पुनः प्रयास करें।"),
    ("❌ Server not responding", "❌ सर्वर प्रतिक्रिया नहीं दे रहा"),
    ("Session expired. Please sign up again.", "सत्र समाप्त हो गया। फिर से साइन अप करें।"),
    (
        "⚠️ Please select sowing month within the next 3 months only for accurate prediction.",
        "⚠️ कृपया अगले 3 महीनों के भीतर ही बुवाई का महीना चुनें।",
    ),
    (
        "❌ Form fields missing! Check input IDs in HTML.",
        "❌ फॉर्म इनपुट फ़ील्ड गायब हैं। कृपया HTML आईडी जांचें।",
    ),
];
