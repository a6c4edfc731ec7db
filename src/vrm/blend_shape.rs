//! Blend-shape naming.
//!
//! [`BlendShapeRootKey`] names the scene nodes that own blend-shape channels;
//! [`BlendShapeKey`] names the channels themselves. Both are closed sets: an
//! asset may define morph targets outside them, and such targets are shown in
//! the panel but ignored when routing weights.

named_enum! {
    /// A scene node that groups one or more blend-shape channels.
    ///
    /// Declaration order is the order groups appear in the panel.
    pub enum BlendShapeRootKey: "blend shape root" {
        Face => "face",
        Body => "body",
        Hair => "hair",
    }
}

named_enum! {
    /// A recognised morph-target channel name.
    pub enum BlendShapeKey: "blend shape" {
        // VRM expression presets
        Neutral => "neutral",
        Aa => "aa",
        Ih => "ih",
        Ou => "ou",
        Ee => "ee",
        Oh => "oh",
        Blink => "blink",
        BlinkLeft => "blinkLeft",
        BlinkRight => "blinkRight",
        Happy => "happy",
        Angry => "angry",
        Sad => "sad",
        Relaxed => "relaxed",
        Surprised => "surprised",
        LookUp => "lookUp",
        LookDown => "lookDown",
        LookLeft => "lookLeft",
        LookRight => "lookRight",

        // Symmetric aggregates of the ARKit pairs below
        EyeBlink => "eyeBlink",
        EyeSquint => "eyeSquint",
        EyeWide => "eyeWide",
        BrowDown => "browDown",
        BrowOuterUp => "browOuterUp",
        CheekSquint => "cheekSquint",
        MouthSmile => "mouthSmile",
        MouthFrown => "mouthFrown",
        MouthDimple => "mouthDimple",
        MouthStretch => "mouthStretch",
        MouthPress => "mouthPress",
        MouthLowerDown => "mouthLowerDown",
        MouthUpperUp => "mouthUpperUp",
        NoseSneer => "noseSneer",

        // ARKit face channels
        EyeBlinkLeft => "eyeBlinkLeft",
        EyeLookDownLeft => "eyeLookDownLeft",
        EyeLookInLeft => "eyeLookInLeft",
        EyeLookOutLeft => "eyeLookOutLeft",
        EyeLookUpLeft => "eyeLookUpLeft",
        EyeSquintLeft => "eyeSquintLeft",
        EyeWideLeft => "eyeWideLeft",
        EyeBlinkRight => "eyeBlinkRight",
        EyeLookDownRight => "eyeLookDownRight",
        EyeLookInRight => "eyeLookInRight",
        EyeLookOutRight => "eyeLookOutRight",
        EyeLookUpRight => "eyeLookUpRight",
        EyeSquintRight => "eyeSquintRight",
        EyeWideRight => "eyeWideRight",
        JawForward => "jawForward",
        JawLeft => "jawLeft",
        JawRight => "jawRight",
        JawOpen => "jawOpen",
        MouthClose => "mouthClose",
        MouthFunnel => "mouthFunnel",
        MouthPucker => "mouthPucker",
        MouthLeft => "mouthLeft",
        MouthRight => "mouthRight",
        MouthSmileLeft => "mouthSmileLeft",
        MouthSmileRight => "mouthSmileRight",
        MouthFrownLeft => "mouthFrownLeft",
        MouthFrownRight => "mouthFrownRight",
        MouthDimpleLeft => "mouthDimpleLeft",
        MouthDimpleRight => "mouthDimpleRight",
        MouthStretchLeft => "mouthStretchLeft",
        MouthStretchRight => "mouthStretchRight",
        MouthRollLower => "mouthRollLower",
        MouthRollUpper => "mouthRollUpper",
        MouthShrugLower => "mouthShrugLower",
        MouthShrugUpper => "mouthShrugUpper",
        MouthPressLeft => "mouthPressLeft",
        MouthPressRight => "mouthPressRight",
        MouthLowerDownLeft => "mouthLowerDownLeft",
        MouthLowerDownRight => "mouthLowerDownRight",
        MouthUpperUpLeft => "mouthUpperUpLeft",
        MouthUpperUpRight => "mouthUpperUpRight",
        BrowDownLeft => "browDownLeft",
        BrowDownRight => "browDownRight",
        BrowInnerUp => "browInnerUp",
        BrowOuterUpLeft => "browOuterUpLeft",
        BrowOuterUpRight => "browOuterUpRight",
        CheekPuff => "cheekPuff",
        CheekSquintLeft => "cheekSquintLeft",
        CheekSquintRight => "cheekSquintRight",
        NoseSneerLeft => "noseSneerLeft",
        NoseSneerRight => "noseSneerRight",
        TongueOut => "tongueOut",
    }
}

impl BlendShapeRootKey {
    /// Whether a scene node or mesh name designates this root.
    ///
    /// Exporters disagree on capitalisation (`Face`, `face`, `FACE`), so the
    /// comparison ignores ASCII case.
    #[inline]
    #[must_use]
    pub fn matches_node_name(self, node_name: &str) -> bool {
        node_name.eq_ignore_ascii_case(self.name())
    }
}
